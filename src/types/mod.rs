// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed domain records.

pub mod keevakind;

pub use keevakind::{KeevaKind, KeevaKindSpec, KeevaKindStatus};
