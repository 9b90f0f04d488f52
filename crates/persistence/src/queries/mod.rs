// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `collections` — Collection lookups, listings, and membership reads
//! - `entities` — Publishable entity and learning package lookups
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic
//! versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate
//! version based on the active backend connection.
//!
//! Queries return materialized `Vec`s in explicit id order; nothing here
//! relies on implicit database ordering.

pub mod collections;
pub mod entities;

pub use collections::{
    collection_memberships_mysql, collection_memberships_sqlite, collection_packages_mysql,
    collection_packages_sqlite, entity_collections_mysql, entity_collections_sqlite,
    get_collection_by_id_mysql, get_collection_by_id_sqlite, get_collection_mysql,
    get_collection_sqlite, list_collections_mysql, list_collections_sqlite,
};
pub use entities::{
    entity_packages_mysql, entity_packages_sqlite, get_entity_mysql, get_entity_sqlite,
    learning_package_exists_mysql, learning_package_exists_sqlite,
};
