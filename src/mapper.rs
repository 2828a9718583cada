// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion between [`KeevaKind`] and the untyped document the dynamic client sends.
//!
//! This is the only place untyped values are read or written. Everything past
//! [`from_document`] works with the narrowed, typed record.

use crate::constants::keevakind::{API_VERSION, KIND};
use crate::error::MappingError;
use crate::types::{KeevaKind, KeevaKindSpec, KeevaKindStatus};
use serde_json::{json, Map, Value};

/// Untyped form of a Keevakind: `apiVersion`, `kind`, `metadata` and `spec`
pub type Document = Map<String, Value>;

type MappingResult<T> = std::result::Result<T, MappingError>;

/// Build the document for a Keevakind.
///
/// `apiVersion` and `kind` are always the Keevakind constants. `resourceVersion`
/// and `namespace` are only written when set.
pub fn to_document(keevakind: &KeevaKind) -> Document {
    let mut metadata = Map::new();
    metadata.insert("name".to_string(), Value::from(keevakind.name.as_str()));
    if !keevakind.namespace.is_empty() {
        metadata.insert(
            "namespace".to_string(),
            Value::from(keevakind.namespace.as_str()),
        );
    }
    if let Some(rv) = keevakind.resource_version.as_deref().filter(|rv| !rv.is_empty()) {
        metadata.insert("resourceVersion".to_string(), Value::from(rv));
    }

    let mut document = Map::new();
    document.insert("apiVersion".to_string(), Value::from(API_VERSION));
    document.insert("kind".to_string(), Value::from(KIND));
    document.insert("metadata".to_string(), Value::Object(metadata));
    document.insert(
        "spec".to_string(),
        json!({
            "count": keevakind.spec.count,
            "group": keevakind.spec.group,
            "image": keevakind.spec.image,
            "port": keevakind.spec.port,
        }),
    );
    document
}

/// Read a Keevakind back out of a document.
///
/// The namespace comes from `namespace_hint`: the resource is cluster scoped so
/// the API server does not keep `metadata.namespace`. The document's own
/// namespace is only used when the hint is empty.
pub fn from_document(document: &Document, namespace_hint: &str) -> MappingResult<KeevaKind> {
    expect_constant(document, "apiVersion", API_VERSION)?;
    expect_constant(document, "kind", KIND)?;

    let metadata = object_field(document, "metadata")?;
    let name = string_field(metadata, "name")?;
    let resource_version = optional_string_field(metadata, "resourceVersion")?;
    let namespace = if namespace_hint.is_empty() {
        optional_string_field(metadata, "namespace")?.unwrap_or_default()
    } else {
        namespace_hint.to_string()
    };

    let spec = object_field(document, "spec")?;
    let spec = KeevaKindSpec {
        count: i32_field(spec, "count")?,
        group: string_field(spec, "group")?,
        image: string_field(spec, "image")?,
        port: i32_field(spec, "port")?,
    };

    Ok(KeevaKind {
        name,
        namespace,
        resource_version,
        spec,
        status: KeevaKindStatus::default(),
    })
}

/// A present, non-null value. `null` is treated the same as an absent key.
fn field<'a>(map: &'a Document, key: &str) -> MappingResult<&'a Value> {
    match map.get(key) {
        None | Some(Value::Null) => Err(MappingError::MissingField(key.to_string())),
        Some(value) => Ok(value),
    }
}

fn object_field<'a>(map: &'a Document, key: &str) -> MappingResult<&'a Document> {
    field(map, key)?
        .as_object()
        .ok_or_else(|| MappingError::InvalidField(key.to_string()))
}

fn string_field(map: &Document, key: &str) -> MappingResult<String> {
    field(map, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| MappingError::InvalidField(key.to_string()))
}

fn optional_string_field(map: &Document, key: &str) -> MappingResult<Option<String>> {
    match field(map, key) {
        Ok(_) => string_field(map, key).map(Some),
        Err(MappingError::MissingField(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// JSON numbers arrive as i64/u64/f64 and are narrowed to i32
fn i32_field(map: &Document, key: &str) -> MappingResult<i32> {
    field(map, key)?
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| MappingError::InvalidField(key.to_string()))
}

fn expect_constant(map: &Document, key: &str, expected: &str) -> MappingResult<()> {
    if string_field(map, key)? == expected {
        Ok(())
    } else {
        Err(MappingError::InvalidField(key.to_string()))
    }
}
