// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Random name generation for demo objects

use rand::{distr::Alphanumeric, Rng};

/// Generate a lowercase alphanumeric string of `len` characters
pub fn random_suffix(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// `prefix` followed by a random suffix of `len` characters
pub fn random_name(prefix: &str, len: usize) -> String {
    format!("{}{}", prefix, random_suffix(len))
}
