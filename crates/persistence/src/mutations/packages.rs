// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Learning package and publishable entity mutations.
//!
//! Packages and entities are owned by the surrounding publishing system;
//! the operations here are the minimal creation paths the collections API
//! needs for referential integrity.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{learning_packages, publishable_entities};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new learning package.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - The package key (unique across all packages)
/// * `title` - The package title
/// * `now` - Creation timestamp (RFC 3339)
///
/// # Errors
///
/// Returns an error if the package cannot be created or the key already
/// exists.
pub fn create_learning_package(
    conn: &mut _,
    key: &str,
    title: &str,
    now: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating learning package with key: {}", key);

    diesel::insert_into(learning_packages::table)
        .values((
            learning_packages::key.eq(key),
            learning_packages::title.eq(title),
            learning_packages::created_at.eq(now),
        ))
        .execute(conn)?;

    let learning_package_id: i64 = conn.get_last_insert_rowid()?;

    info!(learning_package_id, "Learning package created");
    Ok(learning_package_id)
}
}

backend_fn! {
/// Creates a new publishable entity in a learning package.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `learning_package_id` - The owning learning package
/// * `key` - The entity key (unique within the package)
/// * `now` - Creation timestamp (RFC 3339)
///
/// # Errors
///
/// Returns an error if the entity cannot be created or the key already
/// exists in the package.
pub fn create_publishable_entity(
    conn: &mut _,
    learning_package_id: i64,
    key: &str,
    now: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating publishable entity '{}' in learning package {}",
        key, learning_package_id
    );

    diesel::insert_into(publishable_entities::table)
        .values((
            publishable_entities::learning_package_id.eq(learning_package_id),
            publishable_entities::key.eq(key),
            publishable_entities::created_at.eq(now),
        ))
        .execute(conn)?;

    let entity_id: i64 = conn.get_last_insert_rowid()?;

    info!(entity_id, "Publishable entity created");
    Ok(entity_id)
}
}
