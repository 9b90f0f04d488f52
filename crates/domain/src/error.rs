// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A collection or entity key is empty or malformed.
    InvalidKey(String),
    /// A collection title is empty or too long.
    InvalidTitle(String),
    /// A membership request references a record from a different
    /// learning package than the target.
    CrossPackageMembership {
        /// The id of the offending collection or entity.
        member_id: i64,
        /// The learning package the offending record belongs to.
        member_package: i64,
        /// The learning package of the target record.
        learning_package_id: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::CrossPackageMembership {
                member_id,
                member_package,
                learning_package_id,
            } => {
                write!(
                    f,
                    "Record {member_id} belongs to learning package {member_package}, \
                     not learning package {learning_package_id}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
