// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Maximum length for collection and entity keys, and for titles.
const MAX_KEY_LENGTH: usize = 500;
const MAX_TITLE_LENGTH: usize = 500;

/// Validates a collection or entity key.
///
/// Keys are opaque identifiers chosen by the caller, but they must be
/// non-empty, fit in the schema's column, and carry no surrounding
/// whitespace (a trimmed key and its untrimmed form would otherwise be
/// distinct rows that render identically).
///
/// # Arguments
///
/// * `key` - The key to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidKey` if the key is empty, too long, or has
/// leading/trailing whitespace.
pub fn validate_collection_key(key: &str) -> Result<(), DomainError> {
    if key.is_empty() {
        return Err(DomainError::InvalidKey(String::from(
            "Key cannot be empty",
        )));
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(DomainError::InvalidKey(format!(
            "Key cannot exceed {MAX_KEY_LENGTH} characters"
        )));
    }

    if key.trim() != key {
        return Err(DomainError::InvalidKey(String::from(
            "Key cannot have leading or trailing whitespace",
        )));
    }

    Ok(())
}

/// Validates a collection title.
///
/// # Arguments
///
/// * `title` - The title to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidTitle` if the title is empty or too long.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    if title.len() > MAX_TITLE_LENGTH {
        return Err(DomainError::InvalidTitle(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates that every referenced record belongs to the target learning
/// package.
///
/// This is the cross-package membership gate: it runs before any membership
/// mutation, so a single mismatch rejects the whole request with no partial
/// effect.
///
/// # Arguments
///
/// * `learning_package_id` - The target record's learning package
/// * `members` - `(record_id, record_package_id)` pairs to check
///
/// # Errors
///
/// Returns `DomainError::CrossPackageMembership` for the first record found
/// in a different learning package.
pub fn validate_same_package(
    learning_package_id: i64,
    members: &[(i64, i64)],
) -> Result<(), DomainError> {
    for (member_id, member_package) in members {
        if *member_package != learning_package_id {
            return Err(DomainError::CrossPackageMembership {
                member_id: *member_id,
                member_package: *member_package,
                learning_package_id,
            });
        }
    }
    Ok(())
}
