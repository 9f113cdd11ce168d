// file: src/config/account.rs
// version: 1.1.0
// guid: c4a8e1f7-2d9b-4c5e-b6a3-8f1d0e7c5a42

//! CI account record models

use serde::{Deserialize, Serialize};

/// A Google Cloud Build credential entry in the deployment configuration tree.
///
/// `name` is the record's identity and is immutable through `edit`; only the
/// content fields change. All content fields are optional so that a partially
/// configured (or invalid) stored record can still be fetched and edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCloudBuildAccount {
    pub name: String,

    /// The Google Cloud project in which to trigger and monitor builds
    #[serde(default)]
    pub project: Option<String>,

    /// The Pub/Sub subscription on which to listen for build changes
    #[serde(default)]
    pub subscription_name: Option<String>,

    /// Path to the JSON service account key used as credentials
    #[serde(default)]
    pub json_key: Option<String>,
}

impl GoogleCloudBuildAccount {
    /// Create an empty account record with the given identity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: None,
            subscription_name: None,
            json_key: None,
        }
    }
}
