// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coursepack_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested learning package does not exist.
    LearningPackageNotFound(i64),
    /// The requested collection does not exist in the learning package.
    CollectionNotFound {
        /// The learning package that was searched.
        learning_package_id: i64,
        /// The collection key that was not found.
        key: String,
    },
    /// The requested publishable entity does not exist in the learning package.
    EntityNotFound {
        /// The learning package that was searched.
        learning_package_id: i64,
        /// The entity key that was not found.
        key: String,
    },
    /// A domain rule was violated. Raised before any mutation; the request
    /// is rejected wholesale with no partial effect.
    Validation(DomainError),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::LearningPackageNotFound(id) => {
                write!(f, "Learning package {id} not found")
            }
            Self::CollectionNotFound {
                learning_package_id,
                key,
            } => {
                write!(
                    f,
                    "Collection '{key}' not found in learning package {learning_package_id}"
                )
            }
            Self::EntityNotFound {
                learning_package_id,
                key,
            } => {
                write!(
                    f,
                    "Publishable entity '{key}' not found in learning package {learning_package_id}"
                )
            }
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}
