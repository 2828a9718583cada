// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Keevakind CRD declaration and registration

use crate::constants::keevakind::{CRD_NAME, GROUP, KIND, PLURAL, SINGULAR, VERSION};
use crate::error::{is_already_exists, SchemaError};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames, CustomResourceDefinitionSpec,
    CustomResourceDefinitionVersion, CustomResourceValidation, JSONSchemaProps,
};
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{info, instrument};

static KEEVAKIND_CRD: LazyLock<CustomResourceDefinition> = LazyLock::new(build_keevakind_crd);

/// The cluster-scoped Keevakind CRD, built once per process
pub fn keevakind_crd() -> &'static CustomResourceDefinition {
    &KEEVAKIND_CRD
}

fn string_schema() -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some("string".to_string()),
        ..Default::default()
    }
}

fn build_keevakind_crd() -> CustomResourceDefinition {
    // `spec` keeps unknown fields so count/group/image/port survive pruning
    let spec_schema = JSONSchemaProps {
        type_: Some("object".to_string()),
        x_kubernetes_preserve_unknown_fields: Some(true),
        properties: Some(BTreeMap::from([
            ("runtimeHandler".to_string(), string_schema()),
            ("kind".to_string(), string_schema()),
        ])),
        ..Default::default()
    };

    CustomResourceDefinition {
        metadata: ObjectMeta {
            name: Some(CRD_NAME.to_string()),
            ..Default::default()
        },
        spec: CustomResourceDefinitionSpec {
            group: GROUP.to_string(),
            names: CustomResourceDefinitionNames {
                plural: PLURAL.to_string(),
                singular: Some(SINGULAR.to_string()),
                kind: KIND.to_string(),
                ..Default::default()
            },
            scope: "Cluster".to_string(),
            versions: vec![CustomResourceDefinitionVersion {
                name: VERSION.to_string(),
                served: true,
                storage: true,
                schema: Some(CustomResourceValidation {
                    open_api_v3_schema: Some(JSONSchemaProps {
                        type_: Some("object".to_string()),
                        properties: Some(BTreeMap::from([("spec".to_string(), spec_schema)])),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }],
            ..Default::default()
        },
        status: None,
    }
}

/// Submit the Keevakind CRD, reporting `AlreadyExists` as an error.
#[instrument(skip(client))]
pub async fn register_schema(client: &Client) -> Result<(), SchemaError> {
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());

    info!("Registering Keevakind CRD");
    match crds.create(&PostParams::default(), keevakind_crd()).await {
        Ok(_) => {
            info!("Keevakind CRD {} registered", CRD_NAME);
            Ok(())
        }
        Err(e) if is_already_exists(&e) => Err(SchemaError::AlreadyExists),
        Err(e) => Err(SchemaError::Unexpected(e)),
    }
}

/// Make sure the Keevakind CRD is declared. Idempotent: an existing CRD is success.
pub async fn ensure_schema_registered(client: &Client) -> Result<(), SchemaError> {
    match register_schema(client).await {
        Err(SchemaError::AlreadyExists) => {
            info!("Keevakind CRD already registered");
            Ok(())
        }
        other => other,
    }
}
