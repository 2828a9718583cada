// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Dynamic (untyped) client for Keevakind documents

use crate::constants::keevakind::{GROUP, KIND, PLURAL, VERSION};
use crate::error::{is_not_found, KeevaError, MappingError, Result};
use crate::mapper::Document;
use kube::{
    api::{ApiResource, DynamicObject, GroupVersionKind, PostParams},
    Api, Client,
};
use serde_json::Value;
use tracing::{debug, instrument};

/// `example.keeva.com/v1alpha1` `keevakinds`
pub fn keevakind_api_resource() -> ApiResource {
    let gvk = GroupVersionKind::gvk(GROUP, VERSION, KIND);
    ApiResource::from_gvk_with_plural(&gvk, PLURAL)
}

/// Create/get/update of Keevakind documents through `Api<DynamicObject>`.
///
/// Keevakinds are cluster scoped, so requests are not namespaced.
#[derive(Clone)]
pub struct KeevaKindApi {
    api: Api<DynamicObject>,
}

impl KeevaKindApi {
    pub fn new(client: Client) -> Self {
        Self {
            api: Api::all_with(client, &keevakind_api_resource()),
        }
    }

    #[instrument(skip(self, document))]
    pub async fn create(&self, document: Document) -> Result<Document> {
        let object = into_dynamic(document)?;
        let created = self.api.create(&PostParams::default(), &object).await?;
        debug!(
            "Created {} with resourceVersion {:?}",
            created.metadata.name.as_deref().unwrap_or_default(),
            created.metadata.resource_version
        );
        from_dynamic(&created)
    }

    /// Fetch a document, mapping a 404 to [`KeevaError::NotFound`]
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Document> {
        match self.api.get(name).await {
            Ok(object) => from_dynamic(&object),
            Err(e) if is_not_found(&e) => Err(KeevaError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the stored document. The document's `resourceVersion` must be current.
    #[instrument(skip(self, document))]
    pub async fn update(&self, document: Document) -> Result<Document> {
        let object = into_dynamic(document)?;
        let name = object
            .metadata
            .name
            .clone()
            .ok_or_else(|| MappingError::MissingField("name".to_string()))?;
        let replaced = self
            .api
            .replace(&name, &PostParams::default(), &object)
            .await?;
        debug!(
            "Replaced {} with resourceVersion {:?}",
            name, replaced.metadata.resource_version
        );
        from_dynamic(&replaced)
    }
}

fn into_dynamic(document: Document) -> Result<DynamicObject> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

fn from_dynamic(object: &DynamicObject) -> Result<Document> {
    match serde_json::to_value(object)? {
        Value::Object(document) => Ok(document),
        _ => Err(MappingError::InvalidField("document".to_string()).into()),
    }
}
