// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{T1, T2, clock_t2, create_test_entities, create_test_package, create_test_persistence};
use crate::{Persistence, PersistenceError};
use coursepack_domain::{Collection, DomainError};

#[test]
fn test_create_collection_defaults() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);

    let collection: Collection = persistence
        .create_collection(package_id, "col-1", "My Collection", Some(7), "A test collection", true)
        .unwrap();

    assert!(collection.collection_id().is_some());
    assert_eq!(collection.learning_package_id(), package_id);
    assert_eq!(collection.key().value(), "col-1");
    assert_eq!(collection.title(), "My Collection");
    assert_eq!(collection.description(), "A test collection");
    assert!(collection.enabled());
    assert_eq!(collection.created_by(), Some(7));
    assert_eq!(collection.created_at(), T1);
    assert_eq!(collection.modified_at(), T1);
}

#[test]
fn test_create_collection_anonymous_creator() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);

    let collection: Collection = persistence
        .create_collection(package_id, "col-anon", "Anonymous", None, "", true)
        .unwrap();

    assert_eq!(collection.created_by(), None);
}

#[test]
fn test_create_collection_invalid_key() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);

    let result = persistence.create_collection(package_id, "  padded  ", "Title", None, "", true);

    assert!(matches!(
        result,
        Err(PersistenceError::Validation(DomainError::InvalidKey(_)))
    ));
}

#[test]
fn test_create_collection_unknown_package() {
    let mut persistence: Persistence = create_test_persistence();

    let result = persistence.create_collection(9999, "col-1", "Title", None, "", true);

    assert!(matches!(
        result,
        Err(PersistenceError::LearningPackageNotFound(9999))
    ));
}

#[test]
fn test_get_collection_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);

    let result = persistence.get_collection(package_id, "missing");

    assert!(matches!(
        result,
        Err(PersistenceError::CollectionNotFound { .. })
    ));
}

#[test]
fn test_get_collection_includes_disabled() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "", true)
        .unwrap();
    persistence.delete_collection(package_id, "col-1", false).unwrap();

    let collection: Collection = persistence.get_collection(package_id, "col-1").unwrap();

    assert!(!collection.enabled());
}

#[test]
fn test_get_collections_filtering_and_order() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-a", "A", None, "", true)
        .unwrap();
    persistence
        .create_collection(package_id, "col-b", "B", None, "", true)
        .unwrap();
    persistence
        .create_collection(package_id, "col-c", "C", None, "", true)
        .unwrap();
    persistence.delete_collection(package_id, "col-b", false).unwrap();

    let enabled: Vec<Collection> = persistence.get_collections(package_id, Some(true)).unwrap();
    let keys: Vec<&str> = enabled.iter().map(|c| c.key().value()).collect();
    assert_eq!(keys, vec!["col-a", "col-c"]);

    let disabled: Vec<Collection> = persistence.get_collections(package_id, Some(false)).unwrap();
    assert_eq!(disabled.len(), 1);
    assert_eq!(disabled[0].key().value(), "col-b");

    let all: Vec<Collection> = persistence.get_collections(package_id, None).unwrap();
    let keys: Vec<&str> = all.iter().map(|c| c.key().value()).collect();
    assert_eq!(keys, vec!["col-a", "col-b", "col-c"]);

    // Ordering is by collection id, not key.
    let ids: Vec<i64> = all.iter().map(|c| c.collection_id().unwrap()).collect();
    let mut sorted: Vec<i64> = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_get_collections_scoped_to_package() {
    let mut persistence: Persistence = create_test_persistence();
    let package_a: i64 = create_test_package(&mut persistence);
    let package_b: i64 = persistence
        .create_learning_package("course-v2", "Other Course")
        .unwrap();
    persistence
        .create_collection(package_a, "col-a", "A", None, "", true)
        .unwrap();
    persistence
        .create_collection(package_b, "col-b", "B", None, "", true)
        .unwrap();

    let collections: Vec<Collection> = persistence.get_collections(package_a, None).unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].key().value(), "col-a");
}

#[test]
fn test_update_collection_noop_keeps_modified_at() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "Desc", true)
        .unwrap();

    persistence.set_clock(clock_t2);
    let collection: Collection = persistence
        .update_collection(package_id, "col-1", None, None)
        .unwrap();

    assert_eq!(collection.title(), "Title");
    assert_eq!(collection.description(), "Desc");
    assert_eq!(collection.modified_at(), T1);
}

#[test]
fn test_update_collection_title_only() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "Desc", true)
        .unwrap();

    persistence.set_clock(clock_t2);
    let collection: Collection = persistence
        .update_collection(package_id, "col-1", Some("New Title"), None)
        .unwrap();

    assert_eq!(collection.title(), "New Title");
    assert_eq!(collection.description(), "Desc");
    assert_eq!(collection.created_at(), T1);
    assert_eq!(collection.modified_at(), T2);
}

#[test]
fn test_update_collection_description_only() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "Desc", true)
        .unwrap();

    persistence.set_clock(clock_t2);
    let collection: Collection = persistence
        .update_collection(package_id, "col-1", None, Some("New Desc"))
        .unwrap();

    assert_eq!(collection.title(), "Title");
    assert_eq!(collection.description(), "New Desc");
    assert_eq!(collection.modified_at(), T2);
}

#[test]
fn test_update_collection_invalid_title() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "", true)
        .unwrap();

    let result = persistence.update_collection(package_id, "col-1", Some(""), None);

    assert!(matches!(
        result,
        Err(PersistenceError::Validation(DomainError::InvalidTitle(_)))
    ));
}

#[test]
fn test_update_collection_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);

    let result = persistence.update_collection(package_id, "missing", Some("T"), None);

    assert!(matches!(
        result,
        Err(PersistenceError::CollectionNotFound { .. })
    ));
}

#[test]
fn test_soft_delete_and_restore() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    let entity_ids: Vec<i64> = create_test_entities(&mut persistence, package_id, 2);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "", true)
        .unwrap();
    persistence
        .add_to_collection(package_id, "col-1", &entity_ids, None)
        .unwrap();

    persistence.set_clock(clock_t2);
    let pre_delete: Collection = persistence
        .delete_collection(package_id, "col-1", false)
        .unwrap();
    assert!(pre_delete.enabled());

    let soft_deleted: Collection = persistence.get_collection(package_id, "col-1").unwrap();
    assert!(!soft_deleted.enabled());
    assert_eq!(soft_deleted.modified_at(), T2);

    // Soft deletion keeps membership edges in place.
    assert_eq!(
        persistence.collection_memberships(package_id, "col-1").unwrap().len(),
        2
    );

    let restored: Collection = persistence.restore_collection(package_id, "col-1").unwrap();
    assert!(restored.enabled());
    assert_eq!(
        persistence.collection_memberships(package_id, "col-1").unwrap().len(),
        2
    );
}

#[test]
fn test_hard_delete_cascades_memberships() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    let entity_ids: Vec<i64> = create_test_entities(&mut persistence, package_id, 2);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "", true)
        .unwrap();
    persistence
        .add_to_collection(package_id, "col-1", &entity_ids, None)
        .unwrap();

    let pre_delete: Collection = persistence
        .delete_collection(package_id, "col-1", true)
        .unwrap();
    assert_eq!(pre_delete.key().value(), "col-1");

    let result = persistence.get_collection(package_id, "col-1");
    assert!(matches!(
        result,
        Err(PersistenceError::CollectionNotFound { .. })
    ));

    // Membership rows cascaded with the collection.
    assert!(persistence.get_entity_collections(package_id, "unit-1").unwrap().is_empty());
    assert!(persistence.get_entity_collections(package_id, "unit-2").unwrap().is_empty());
}

#[test]
fn test_get_entity_collections_enabled_only() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    let entity_ids: Vec<i64> = create_test_entities(&mut persistence, package_id, 1);
    persistence
        .create_collection(package_id, "col-a", "A", None, "", true)
        .unwrap();
    persistence
        .create_collection(package_id, "col-b", "B", None, "", true)
        .unwrap();
    persistence
        .add_to_collection(package_id, "col-a", &entity_ids, None)
        .unwrap();
    persistence
        .add_to_collection(package_id, "col-b", &entity_ids, None)
        .unwrap();
    persistence.delete_collection(package_id, "col-b", false).unwrap();

    let collections: Vec<Collection> = persistence
        .get_entity_collections(package_id, "unit-1")
        .unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].key().value(), "col-a");
}

#[test]
fn test_get_entity_collections_unknown_entity() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);

    let result = persistence.get_entity_collections(package_id, "missing");

    assert!(matches!(
        result,
        Err(PersistenceError::EntityNotFound { .. })
    ));
}

#[test]
fn test_collection_key_unique_within_package() {
    let mut persistence: Persistence = create_test_persistence();
    let package_id: i64 = create_test_package(&mut persistence);
    persistence
        .create_collection(package_id, "col-1", "Title", None, "", true)
        .unwrap();

    let result = persistence.create_collection(package_id, "col-1", "Again", None, "", true);

    assert!(result.is_err());
}

#[test]
fn test_same_collection_key_allowed_across_packages() {
    let mut persistence: Persistence = create_test_persistence();
    let package_a: i64 = create_test_package(&mut persistence);
    let package_b: i64 = persistence
        .create_learning_package("course-v2", "Other Course")
        .unwrap();

    persistence
        .create_collection(package_a, "col-1", "A", None, "", true)
        .unwrap();
    let collection: Collection = persistence
        .create_collection(package_b, "col-1", "B", None, "", true)
        .unwrap();

    assert_eq!(collection.learning_package_id(), package_b);
}
