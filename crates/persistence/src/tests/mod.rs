// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod collection_tests;

use std::cell::RefCell;
use std::rc::Rc;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{MembershipChange, MembershipListener, Persistence};

/// RFC 3339 rendering of [`clock_t1`].
pub const T1: &str = "2026-03-01T10:00:00Z";
/// RFC 3339 rendering of [`clock_t2`].
pub const T2: &str = "2026-03-01T11:30:00Z";
/// RFC 3339 rendering of [`clock_t3`].
pub const T3: &str = "2026-03-02T09:15:00Z";

pub fn clock_t1() -> OffsetDateTime {
    datetime!(2026-03-01 10:00:00 UTC)
}

pub fn clock_t2() -> OffsetDateTime {
    datetime!(2026-03-01 11:30:00 UTC)
}

pub fn clock_t3() -> OffsetDateTime {
    datetime!(2026-03-02 09:15:00 UTC)
}

/// Creates an in-memory persistence instance pinned to [`clock_t1`].
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.set_clock(clock_t1);
    persistence
}

/// Creates a learning package for tests to hang collections off.
pub fn create_test_package(persistence: &mut Persistence) -> i64 {
    persistence
        .create_learning_package("course-v1", "Intro Course")
        .unwrap()
}

/// Creates `count` publishable entities (`unit-1`, `unit-2`, ...) in the
/// given learning package and returns their ids in creation order.
pub fn create_test_entities(
    persistence: &mut Persistence,
    learning_package_id: i64,
    count: usize,
) -> Vec<i64> {
    (1..=count)
        .map(|i| {
            persistence
                .create_publishable_entity(learning_package_id, &format!("unit-{i}"))
                .unwrap()
        })
        .collect()
}

/// A listener that records every change it receives, for assertions on
/// event count and payload.
pub struct RecordingListener {
    changes: Rc<RefCell<Vec<MembershipChange>>>,
}

impl RecordingListener {
    /// Returns a listener plus the shared log the test keeps to inspect it.
    pub fn create() -> (Self, Rc<RefCell<Vec<MembershipChange>>>) {
        let changes: Rc<RefCell<Vec<MembershipChange>>> = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                changes: Rc::clone(&changes),
            },
            changes,
        )
    }
}

impl MembershipListener for RecordingListener {
    fn on_membership_change(&mut self, change: &MembershipChange) {
        self.changes.borrow_mut().push(change.clone());
    }
}
