// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Most mutations use Diesel DSL and are backend-agnostic, with
//! minimal use of backend-specific helpers (e.g., `last_insert_rowid()`
//! for `SQLite`).
//!
//! ## Module Organization
//!
//! - `packages` — Learning package and publishable entity creation
//! - `collections` — Collection CRUD (single-row "full save" writes)
//! - `memberships` — Membership add/remove and the set-collections
//!   reconciler, including the bulk `modified_at` stamp on affected
//!   collections
//!
//! ## Timestamps
//!
//! Mutations never read the database clock. The `Persistence` adapter owns
//! the clock and passes RFC 3339 timestamps in, so tests can control time
//! deterministically.

pub mod collections;
pub mod memberships;
pub mod packages;

pub use collections::{
    create_collection_mysql, create_collection_sqlite, hard_delete_collection_mysql,
    hard_delete_collection_sqlite, set_collection_enabled_mysql, set_collection_enabled_sqlite,
    update_collection_fields_mysql, update_collection_fields_sqlite,
};
pub use memberships::{
    add_entities_to_collection_mysql, add_entities_to_collection_sqlite,
    remove_entities_from_collection_mysql, remove_entities_from_collection_sqlite,
    set_entity_collections_mysql, set_entity_collections_sqlite,
};
pub use packages::{
    create_learning_package_mysql, create_learning_package_sqlite,
    create_publishable_entity_mysql, create_publishable_entity_sqlite,
};
