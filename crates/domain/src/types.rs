// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A stable external identifier for a collection within a learning package.
///
/// Keys are opaque, case-sensitive strings chosen by the caller. They are
/// unique per learning package and never change after creation, unlike
/// titles which are free-form display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionKey {
    value: String,
}

impl CollectionKey {
    /// Creates a new `CollectionKey`.
    ///
    /// # Arguments
    ///
    /// * `value` - The key value (stored as-is; validated separately)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the key value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A stable external identifier for a publishable entity within a
/// learning package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKey {
    value: String,
}

impl EntityKey {
    /// Creates a new `EntityKey`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the key value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A learning package: the tenant/namespace that owns entities and
/// collections. Membership never crosses a package boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPackage {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the package has not been persisted yet.
    learning_package_id: Option<i64>,
    /// The external key (unique across all packages).
    key: String,
    /// Human-readable title.
    title: String,
}

// Two LearningPackages are equal if they have the same key, regardless of
// their persisted IDs.
impl PartialEq for LearningPackage {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for LearningPackage {}

impl std::hash::Hash for LearningPackage {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl LearningPackage {
    /// Creates a new `LearningPackage` without a persisted ID.
    #[must_use]
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            learning_package_id: None,
            key: key.to_string(),
            title: title.to_string(),
        }
    }

    /// Creates a `LearningPackage` with an existing persisted ID.
    #[must_use]
    pub fn with_id(learning_package_id: i64, key: &str, title: &str) -> Self {
        Self {
            learning_package_id: Some(learning_package_id),
            key: key.to_string(),
            title: title.to_string(),
        }
    }

    /// Returns the persisted ID, if any.
    #[must_use]
    pub const fn learning_package_id(&self) -> Option<i64> {
        self.learning_package_id
    }

    /// Returns the external key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// An addressable unit of content that can belong to collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishableEntity {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the entity has not been persisted yet.
    entity_id: Option<i64>,
    /// The owning learning package.
    learning_package_id: i64,
    /// The external key (unique within the learning package).
    key: EntityKey,
    /// Creation timestamp (RFC 3339).
    created_at: String,
}

// Two PublishableEntities are equal if they have the same package and key.
impl PartialEq for PublishableEntity {
    fn eq(&self, other: &Self) -> bool {
        self.learning_package_id == other.learning_package_id && self.key == other.key
    }
}

impl Eq for PublishableEntity {}

impl std::hash::Hash for PublishableEntity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.learning_package_id.hash(state);
        self.key.hash(state);
    }
}

impl PublishableEntity {
    /// Creates a `PublishableEntity` with an existing persisted ID.
    #[must_use]
    pub fn with_id(
        entity_id: i64,
        learning_package_id: i64,
        key: EntityKey,
        created_at: &str,
    ) -> Self {
        Self {
            entity_id: Some(entity_id),
            learning_package_id,
            key,
            created_at: created_at.to_string(),
        }
    }

    /// Returns the persisted ID, if any.
    #[must_use]
    pub const fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    /// Returns the owning learning package ID.
    #[must_use]
    pub const fn learning_package_id(&self) -> i64 {
        self.learning_package_id
    }

    /// Returns the external key.
    #[must_use]
    pub const fn key(&self) -> &EntityKey {
        &self.key
    }

    /// Returns the creation timestamp (RFC 3339).
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// A named, enable/disable-able grouping of publishable entities.
///
/// `enabled = false` marks a soft-deleted collection: it stays queryable by
/// key but is excluded from default listings and can be restored later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the collection has not been persisted yet.
    collection_id: Option<i64>,
    /// The owning learning package.
    learning_package_id: i64,
    /// The external key (unique within the learning package).
    key: CollectionKey,
    /// Display title.
    title: String,
    /// Free-form description.
    description: String,
    /// Soft-delete flag. Disabled collections are excluded from default
    /// listings but remain addressable by key.
    enabled: bool,
    /// Creation timestamp (RFC 3339).
    created_at: String,
    /// The actor that created the collection, if recorded.
    created_by: Option<i64>,
    /// Last-modified timestamp (RFC 3339). Bumped by field updates and by
    /// membership changes that touch this collection.
    modified_at: String,
}

// Two Collections are equal if they have the same package and key,
// regardless of their persisted IDs or mutable fields.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.learning_package_id == other.learning_package_id && self.key == other.key
    }
}

impl Eq for Collection {}

impl std::hash::Hash for Collection {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.learning_package_id.hash(state);
        self.key.hash(state);
    }
}

impl Collection {
    /// Creates a `Collection` with an existing persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        collection_id: i64,
        learning_package_id: i64,
        key: CollectionKey,
        title: &str,
        description: &str,
        enabled: bool,
        created_at: &str,
        created_by: Option<i64>,
        modified_at: &str,
    ) -> Self {
        Self {
            collection_id: Some(collection_id),
            learning_package_id,
            key,
            title: title.to_string(),
            description: description.to_string(),
            enabled,
            created_at: created_at.to_string(),
            created_by,
            modified_at: modified_at.to_string(),
        }
    }

    /// Returns the persisted ID, if any.
    #[must_use]
    pub const fn collection_id(&self) -> Option<i64> {
        self.collection_id
    }

    /// Returns the owning learning package ID.
    #[must_use]
    pub const fn learning_package_id(&self) -> i64 {
        self.learning_package_id
    }

    /// Returns the external key.
    #[must_use]
    pub const fn key(&self) -> &CollectionKey {
        &self.key
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the collection is enabled (not soft-deleted).
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the creation timestamp (RFC 3339).
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns the creating actor, if recorded.
    #[must_use]
    pub const fn created_by(&self) -> Option<i64> {
        self.created_by
    }

    /// Returns the last-modified timestamp (RFC 3339).
    #[must_use]
    pub fn modified_at(&self) -> &str {
        &self.modified_at
    }
}
