// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Identity of the Keevakind custom resource type
pub mod keevakind {
    pub const GROUP: &str = "example.keeva.com";
    pub const VERSION: &str = "v1alpha1";
    /// Always `<GROUP>/<VERSION>`
    pub const API_VERSION: &str = "example.keeva.com/v1alpha1";
    pub const KIND: &str = "Keevakind";
    pub const PLURAL: &str = "keevakinds";
    pub const SINGULAR: &str = "keevakind";
    /// CRD objects are named `<plural>.<group>`
    pub const CRD_NAME: &str = "keevakinds.example.keeva.com";
}

/// Values used when the environment does not override them
pub mod defaults {
    pub const NAMESPACE: &str = "james";
    pub const NAME_PREFIX: &str = "keeva-";
    pub const UPDATED_GROUP: &str = "mygroup1";
    /// Length of the random suffixes in generated names
    pub const SUFFIX_LEN: usize = 5;
    pub const COUNT: i32 = 14;
    pub const PORT: i32 = 8080;
}
