// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD registration, and dynamic Keevakind access.

pub mod client;
pub mod crd;
pub mod resource;

pub use client::create_client;
pub use crd::{ensure_schema_registered, keevakind_crd, register_schema};
pub use resource::KeevaKindApi;
