// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection mutations.
//!
//! These are the "full save" writes: each operation targets a single
//! collection's fields and bumps its `modified_at`. Membership changes
//! stamp `modified_at` differently — a bulk UPDATE by id list inside the
//! membership transaction (see `mutations::memberships`), so a large
//! affected set is one statement, not N full-row saves.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::collections;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new collection.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `learning_package_id` - The owning learning package
/// * `key` - The collection key (unique within the package)
/// * `title` - The display title
/// * `description` - Free-form description
/// * `enabled` - Initial enabled state
/// * `created_by` - Optional creating actor
/// * `now` - Creation timestamp (RFC 3339); also the initial `modified_at`
///
/// # Errors
///
/// Returns an error if the collection cannot be created or the key already
/// exists in the package.
pub fn create_collection(
    conn: &mut _,
    learning_package_id: i64,
    key: &str,
    title: &str,
    description: &str,
    enabled: bool,
    created_by: Option<i64>,
    now: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating collection '{}' in learning package {}",
        key, learning_package_id
    );

    diesel::insert_into(collections::table)
        .values((
            collections::learning_package_id.eq(learning_package_id),
            collections::key.eq(key),
            collections::title.eq(title),
            collections::description.eq(description),
            collections::enabled.eq(i32::from(enabled)),
            collections::created_at.eq(now),
            collections::created_by.eq(created_by),
            collections::modified_at.eq(now),
        ))
        .execute(conn)?;

    let collection_id: i64 = conn.get_last_insert_rowid()?;

    info!(collection_id, "Collection created");
    Ok(collection_id)
}
}

backend_fn! {
/// Updates a collection's title and description (the full save path).
///
/// Bumps `modified_at`. The caller resolves which fields actually changed;
/// this function writes both.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The collection to update
/// * `title` - The new title
/// * `description` - The new description
/// * `now` - Modification timestamp (RFC 3339)
///
/// # Errors
///
/// Returns `NotFound` if the collection does not exist.
pub fn update_collection_fields(
    conn: &mut _,
    collection_id: i64,
    title: &str,
    description: &str,
    now: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating fields on collection {}", collection_id);

    let rows_affected: usize = diesel::update(collections::table)
        .filter(collections::collection_id.eq(collection_id))
        .set((
            collections::title.eq(title),
            collections::description.eq(description),
            collections::modified_at.eq(now),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Collection {collection_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Sets a collection's enabled flag (soft delete / restore).
///
/// Bumps `modified_at`. Soft deletion is reversible; membership edges are
/// left in place.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The collection to update
/// * `enabled` - `false` to soft-delete, `true` to restore
/// * `now` - Modification timestamp (RFC 3339)
///
/// # Errors
///
/// Returns `NotFound` if the collection does not exist.
pub fn set_collection_enabled(
    conn: &mut _,
    collection_id: i64,
    enabled: bool,
    now: &str,
) -> Result<(), PersistenceError> {
    info!(
        "Setting collection {} enabled = {}",
        collection_id, enabled
    );

    let rows_affected: usize = diesel::update(collections::table)
        .filter(collections::collection_id.eq(collection_id))
        .set((
            collections::enabled.eq(i32::from(enabled)),
            collections::modified_at.eq(now),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Collection {collection_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Hard-deletes a collection.
///
/// Irreversible. Membership rows cascade via the foreign key.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The collection to delete
///
/// # Errors
///
/// Returns `NotFound` if the collection does not exist.
pub fn hard_delete_collection(
    conn: &mut _,
    collection_id: i64,
) -> Result<(), PersistenceError> {
    info!("Hard-deleting collection {}", collection_id);

    let rows_affected: usize = diesel::delete(collections::table)
        .filter(collections::collection_id.eq(collection_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Collection {collection_id} not found"
        )));
    }

    Ok(())
}
}
