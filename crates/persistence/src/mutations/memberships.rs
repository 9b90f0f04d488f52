// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Membership mutations: add, remove, and the set-collections reconciler.
//!
//! Each operation here runs inside one database transaction, so a failure
//! partway through rolls back every edge change and timestamp stamp
//! together. Cross-package validation happens in the adapter BEFORE these
//! functions are called; by the time a mutation runs, the request is known
//! to be well-formed.
//!
//! The reconciler touches only the membership delta. Rows for pairs that
//! stay in the set are never rewritten, so their original `created_at` /
//! `created_by` bookkeeping survives reconciliation.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::diesel_schema::{collection_entities, collections};
use crate::error::PersistenceError;

backend_fn! {
/// Adds entities to a collection.
///
/// Entities already present are silently ignored (membership is a set).
/// The collection's `modified_at` is updated unconditionally, even when
/// every entity was already present — callers rely on this for "touch"
/// semantics.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The target collection
/// * `entity_ids` - The entities to add
/// * `created_by` - Optional actor recorded on newly created rows
/// * `now` - Timestamp (RFC 3339) for new rows and the `modified_at` stamp
///
/// # Errors
///
/// Returns an error if any database operation fails; the transaction rolls
/// back as a unit.
pub fn add_entities_to_collection(
    conn: &mut _,
    collection_id: i64,
    entity_ids: &[i64],
    created_by: Option<i64>,
    now: &str,
) -> Result<(), PersistenceError> {
    info!(
        "Adding {} entities to collection {}",
        entity_ids.len(),
        collection_id
    );

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if !entity_ids.is_empty() {
            let rows: Vec<_> = entity_ids
                .iter()
                .map(|entity_id| {
                    (
                        collection_entities::collection_id.eq(collection_id),
                        collection_entities::entity_id.eq(*entity_id),
                        collection_entities::created_by.eq(created_by),
                        collection_entities::created_at.eq(now),
                    )
                })
                .collect();

            diesel::insert_or_ignore_into(collection_entities::table)
                .values(&rows)
                .execute(conn)?;
        }

        // Touch semantics: stamp even when nothing was inserted.
        diesel::update(collections::table)
            .filter(collections::collection_id.eq(collection_id))
            .set(collections::modified_at.eq(now))
            .execute(conn)?;

        Ok(())
    })
}
}

backend_fn! {
/// Removes entities from a collection.
///
/// Entities not present are silently ignored. The collection's
/// `modified_at` is updated unconditionally, even when nothing was
/// removed.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection_id` - The target collection
/// * `entity_ids` - The entities to remove
/// * `now` - Timestamp (RFC 3339) for the `modified_at` stamp
///
/// # Errors
///
/// Returns an error if any database operation fails; the transaction rolls
/// back as a unit.
pub fn remove_entities_from_collection(
    conn: &mut _,
    collection_id: i64,
    entity_ids: &[i64],
    now: &str,
) -> Result<(), PersistenceError> {
    info!(
        "Removing {} entities from collection {}",
        entity_ids.len(),
        collection_id
    );

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if !entity_ids.is_empty() {
            diesel::delete(collection_entities::table)
                .filter(collection_entities::collection_id.eq(collection_id))
                .filter(collection_entities::entity_id.eq_any(entity_ids))
                .execute(conn)?;
        }

        // Touch semantics: stamp even when nothing was removed.
        diesel::update(collections::table)
            .filter(collections::collection_id.eq(collection_id))
            .set(collections::modified_at.eq(now))
            .execute(conn)?;

        Ok(())
    })
}
}

backend_fn! {
/// Reconciles an entity's collection membership to exactly the desired set.
///
/// Computes the delta against the current edge set:
/// `removed = current − desired`, `added = desired − current`. Only the
/// delta is written: rows in `current ∩ desired` are untouched and keep
/// their original `created_at`/`created_by`. Every collection in
/// `removed ∪ added` gets its `modified_at` stamped via one bulk UPDATE.
///
/// The whole read-compute-write sequence runs in a single transaction.
/// `SQLite` serializes writers outright; on `MySQL` the default
/// REPEATABLE READ level is accepted, with the unique `(collection,
/// entity)` constraint keeping membership a set under races.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entity_id` - The entity whose membership is reconciled
/// * `desired` - The desired collection ids (validated by the caller)
/// * `created_by` - Optional actor recorded on newly created rows
/// * `now` - Timestamp (RFC 3339) for new rows and the bulk stamp
///
/// # Returns
///
/// `(added, removed)` collection id sets. Their union is the affected set.
///
/// # Errors
///
/// Returns an error if any database operation fails; the transaction rolls
/// back as a unit.
pub fn set_entity_collections(
    conn: &mut _,
    entity_id: i64,
    desired: &[i64],
    created_by: Option<i64>,
    now: &str,
) -> Result<(BTreeSet<i64>, BTreeSet<i64>), PersistenceError> {
    info!(
        "Reconciling entity {} to {} desired collections",
        entity_id,
        desired.len()
    );

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let current: BTreeSet<i64> = collection_entities::table
            .filter(collection_entities::entity_id.eq(entity_id))
            .select(collection_entities::collection_id)
            .load::<i64>(conn)?
            .into_iter()
            .collect();
        let desired: BTreeSet<i64> = desired.iter().copied().collect();

        let removed: BTreeSet<i64> = current.difference(&desired).copied().collect();
        let added: BTreeSet<i64> = desired.difference(&current).copied().collect();

        if !removed.is_empty() {
            let removed_ids: Vec<i64> = removed.iter().copied().collect();
            diesel::delete(collection_entities::table)
                .filter(collection_entities::entity_id.eq(entity_id))
                .filter(collection_entities::collection_id.eq_any(&removed_ids))
                .execute(conn)?;
        }

        if !added.is_empty() {
            let rows: Vec<_> = added
                .iter()
                .map(|collection_id| {
                    (
                        collection_entities::collection_id.eq(*collection_id),
                        collection_entities::entity_id.eq(entity_id),
                        collection_entities::created_by.eq(created_by),
                        collection_entities::created_at.eq(now),
                    )
                })
                .collect();

            diesel::insert_or_ignore_into(collection_entities::table)
                .values(&rows)
                .execute(conn)?;
        }

        // One bulk stamp for the delta; unchanged collections keep their
        // modified_at.
        let affected: Vec<i64> = removed.union(&added).copied().collect();
        if !affected.is_empty() {
            diesel::update(collections::table)
                .filter(collections::collection_id.eq_any(&affected))
                .set(collections::modified_at.eq(now))
                .execute(conn)?;
        }

        debug!(
            "Reconciled entity {}: {} added, {} removed",
            entity_id,
            added.len(),
            removed.len()
        );

        Ok((added, removed))
    })
}
}
