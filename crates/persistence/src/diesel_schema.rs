// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    learning_packages (learning_package_id) {
        learning_package_id -> BigInt,
        key -> Text,
        title -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    publishable_entities (entity_id) {
        entity_id -> BigInt,
        learning_package_id -> BigInt,
        key -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    collections (collection_id) {
        collection_id -> BigInt,
        learning_package_id -> BigInt,
        key -> Text,
        title -> Text,
        description -> Text,
        enabled -> Integer,
        created_at -> Text,
        created_by -> Nullable<BigInt>,
        modified_at -> Text,
    }
}

diesel::table! {
    collection_entities (id) {
        id -> BigInt,
        collection_id -> BigInt,
        entity_id -> BigInt,
        created_by -> Nullable<BigInt>,
        created_at -> Text,
    }
}

diesel::joinable!(publishable_entities -> learning_packages (learning_package_id));
diesel::joinable!(collections -> learning_packages (learning_package_id));
diesel::joinable!(collection_entities -> collections (collection_id));
diesel::joinable!(collection_entities -> publishable_entities (entity_id));

diesel::allow_tables_to_appear_in_same_query!(
    learning_packages,
    publishable_entities,
    collections,
    collection_entities,
);
