// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Publishable entity and learning package queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use coursepack_domain::{EntityKey, PublishableEntity};

use crate::diesel_schema::{learning_packages, publishable_entities};
use crate::error::PersistenceError;

/// Diesel Queryable struct for publishable entity rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = publishable_entities)]
struct EntityRow {
    entity_id: i64,
    learning_package_id: i64,
    key: String,
    created_at: String,
}

backend_fn! {
/// Retrieves a publishable entity by learning package and key.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `learning_package_id` - The owning learning package
/// * `key` - The entity key
///
/// # Errors
///
/// Returns `EntityNotFound` if no such entity exists.
pub fn get_entity(
    conn: &mut _,
    learning_package_id: i64,
    key: &str,
) -> Result<PublishableEntity, PersistenceError> {
    debug!(
        "Looking up entity '{}' in learning package {}",
        key, learning_package_id
    );

    let result: Result<EntityRow, diesel::result::Error> = publishable_entities::table
        .filter(publishable_entities::learning_package_id.eq(learning_package_id))
        .filter(publishable_entities::key.eq(key))
        .select(EntityRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(PublishableEntity::with_id(
            row.entity_id,
            row.learning_package_id,
            EntityKey::new(&row.key),
            &row.created_at,
        )),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::EntityNotFound {
            learning_package_id,
            key: key.to_string(),
        }),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves `(entity_id, learning_package_id)` pairs for the given entity
/// ids, ordered by entity id.
///
/// Used by the cross-package validation gate before adding entities to a
/// collection.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entity_ids` - The entity ids to resolve
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn entity_packages(
    conn: &mut _,
    entity_ids: &[i64],
) -> Result<Vec<(i64, i64)>, PersistenceError> {
    debug!("Resolving packages for {} entities", entity_ids.len());

    let pairs: Vec<(i64, i64)> = publishable_entities::table
        .filter(publishable_entities::entity_id.eq_any(entity_ids))
        .select((
            publishable_entities::entity_id,
            publishable_entities::learning_package_id,
        ))
        .order_by(publishable_entities::entity_id.asc())
        .load(conn)?;

    Ok(pairs)
}
}

backend_fn! {
/// Checks whether a learning package exists.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `learning_package_id` - The learning package id to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn learning_package_exists(
    conn: &mut _,
    learning_package_id: i64,
) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    debug!("Checking learning package {} exists", learning_package_id);

    let count: i64 = learning_packages::table
        .filter(learning_packages::learning_package_id.eq(learning_package_id))
        .select(count(learning_packages::learning_package_id))
        .first(conn)?;

    Ok(count > 0)
}
}
