// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Membership change notifications.
//!
//! Every bulk membership call (`add_to_collection`, `remove_from_collection`,
//! `set_collections`) emits exactly ONE `MembershipChange` to each registered
//! listener — never one per added or removed element. Downstream consumers
//! (search indexing, cache invalidation) rely on this to avoid event storms
//! when large entity sets change hands.
//!
//! Listeners are notified only after the underlying transaction has
//! committed. A listener cannot veto or roll back a change.

use serde::Serialize;
use std::collections::BTreeSet;

/// A single bulk change to the collection/entity membership relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MembershipChange {
    /// Entities were added to or removed from one collection
    /// (`add_to_collection` / `remove_from_collection`).
    CollectionEntities {
        /// The collection whose membership changed.
        collection_id: i64,
        /// Entity ids that actually joined the collection.
        added_entities: BTreeSet<i64>,
        /// Entity ids that actually left the collection.
        removed_entities: BTreeSet<i64>,
    },
    /// One entity's collection set was reconciled (`set_collections`).
    /// The add/remove sets are the exact delta; both may be empty when the
    /// desired set already matched.
    EntityCollections {
        /// The entity whose collection set was reconciled.
        entity_id: i64,
        /// Collections the entity joined.
        added_collections: BTreeSet<i64>,
        /// Collections the entity left.
        removed_collections: BTreeSet<i64>,
    },
}

/// A consumer of membership change notifications.
pub trait MembershipListener {
    /// Called once per bulk membership change, after commit.
    fn on_membership_change(&mut self, change: &MembershipChange);
}
