// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection queries.
//!
//! This module contains backend-agnostic queries for retrieving collections
//! and their membership rows. All queries use Diesel DSL and work across
//! all supported database backends.
//!
//! Collections are addressed externally by `(learning_package_id, key)`;
//! numeric ids are internal and appear in results only as ordering and
//! bulk-update handles.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use coursepack_domain::{Collection, CollectionKey};

use crate::data_models::MembershipData;
use crate::diesel_schema::{collection_entities, collections};
use crate::error::PersistenceError;

/// Diesel Queryable struct for collection rows.
///
/// Field order matches the `collections` table declaration.
#[derive(Queryable, Selectable)]
#[diesel(table_name = collections)]
struct CollectionRow {
    collection_id: i64,
    learning_package_id: i64,
    key: String,
    title: String,
    description: String,
    enabled: i32,
    created_at: String,
    created_by: Option<i64>,
    modified_at: String,
}

/// Maps a database row into the domain `Collection` type.
fn collection_from_row(row: CollectionRow) -> Collection {
    Collection::with_id(
        row.collection_id,
        row.learning_package_id,
        CollectionKey::new(&row.key),
        &row.title,
        &row.description,
        row.enabled != 0,
        &row.created_at,
        row.created_by,
        &row.modified_at,
    )
}

backend_fn! {
/// Retrieves a collection by learning package and key.
///
/// Disabled (soft-deleted) collections are returned too; only default
/// listings exclude them.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `learning_package_id` - The owning learning package
/// * `key` - The collection key
///
/// # Errors
///
/// Returns `CollectionNotFound` if no such collection exists.
pub fn get_collection(
    conn: &mut _,
    learning_package_id: i64,
    key: &str,
) -> Result<Collection, PersistenceError> {
    debug!(
        "Looking up collection '{}' in learning package {}",
        key, learning_package_id
    );

    let result: Result<CollectionRow, diesel::result::Error> = collections::table
        .filter(collections::learning_package_id.eq(learning_package_id))
        .filter(collections::key.eq(key))
        .select(CollectionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(collection_from_row(row)),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::CollectionNotFound {
            learning_package_id,
            key: key.to_string(),
        }),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a collection by its internal id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The internal collection id
///
/// # Errors
///
/// Returns `NotFound` if no such collection exists.
pub fn get_collection_by_id(
    conn: &mut _,
    collection_id: i64,
) -> Result<Collection, PersistenceError> {
    debug!("Looking up collection by id: {}", collection_id);

    let result: Result<CollectionRow, diesel::result::Error> = collections::table
        .filter(collections::collection_id.eq(collection_id))
        .select(CollectionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(collection_from_row(row)),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::NotFound(format!(
            "Collection {collection_id} not found"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists collections in a learning package, ordered by collection id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `learning_package_id` - The learning package to list
/// * `enabled` - `Some(true)` for enabled only (the conventional default),
///   `Some(false)` for soft-deleted only, `None` for all
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_collections(
    conn: &mut _,
    learning_package_id: i64,
    enabled: Option<bool>,
) -> Result<Vec<Collection>, PersistenceError> {
    debug!(
        "Listing collections in learning package {} (enabled filter: {:?})",
        learning_package_id, enabled
    );

    let mut query = collections::table
        .filter(collections::learning_package_id.eq(learning_package_id))
        .order_by(collections::collection_id.asc())
        .into_boxed();

    if let Some(enabled) = enabled {
        query = query.filter(collections::enabled.eq(i32::from(enabled)));
    }

    let rows: Vec<CollectionRow> = query.load(conn)?;

    Ok(rows.into_iter().map(collection_from_row).collect())
}
}

backend_fn! {
/// Retrieves `(collection_id, learning_package_id)` pairs for the given
/// collection ids, ordered by collection id.
///
/// Used by the cross-package validation gate: the caller compares the
/// result against the requested id set to detect unknown collections, and
/// checks every package id against the target package before mutating.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_ids` - The collection ids to resolve
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn collection_packages(
    conn: &mut _,
    collection_ids: &[i64],
) -> Result<Vec<(i64, i64)>, PersistenceError> {
    debug!("Resolving packages for {} collections", collection_ids.len());

    let pairs: Vec<(i64, i64)> = collections::table
        .filter(collections::collection_id.eq_any(collection_ids))
        .select((collections::collection_id, collections::learning_package_id))
        .order_by(collections::collection_id.asc())
        .load(conn)?;

    Ok(pairs)
}
}

backend_fn! {
/// Lists the enabled collections containing a given entity, ordered by
/// collection id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entity_id` - The internal entity id
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn entity_collections(
    conn: &mut _,
    entity_id: i64,
) -> Result<Vec<Collection>, PersistenceError> {
    debug!("Listing enabled collections containing entity {}", entity_id);

    let rows: Vec<CollectionRow> = collections::table
        .inner_join(collection_entities::table)
        .filter(collection_entities::entity_id.eq(entity_id))
        .filter(collections::enabled.eq(1))
        .select(CollectionRow::as_select())
        .order_by(collections::collection_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(collection_from_row).collect())
}
}

backend_fn! {
/// Lists the membership rows of a collection, ordered by entity id.
///
/// Exposes the bookkeeping fields (`created_at`, `created_by`) so callers
/// can audit who added an entity and when.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The internal collection id
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn collection_memberships(
    conn: &mut _,
    collection_id: i64,
) -> Result<Vec<MembershipData>, PersistenceError> {
    debug!("Listing membership rows for collection {}", collection_id);

    let rows: Vec<(i64, i64, i64, Option<i64>, String)> = collection_entities::table
        .filter(collection_entities::collection_id.eq(collection_id))
        .select((
            collection_entities::id,
            collection_entities::collection_id,
            collection_entities::entity_id,
            collection_entities::created_by,
            collection_entities::created_at,
        ))
        .order_by(collection_entities::entity_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, collection_id, entity_id, created_by, created_at)| MembershipData {
            id,
            collection_id,
            entity_id,
            created_by,
            created_at,
        })
        .collect())
}
}
