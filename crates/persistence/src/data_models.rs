// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A membership row linking a collection to a publishable entity.
///
/// The `created_at`/`created_by` bookkeeping on a membership row records who
/// first added the entity and when. Reconciliation must leave these intact
/// for pairs that stay in the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipData {
    pub id: i64,
    pub collection_id: i64,
    pub entity_id: i64,
    pub created_by: Option<i64>,
    pub created_at: String,
}
