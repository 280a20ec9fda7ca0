// src/domain/modification.rs

use serde::{Deserialize, Deserializer, Serialize};

/// A client-store modification exactly as the store API describes it.
///
/// The same shape is written to the baseline file, so a freshly fetched record
/// and the persisted one can always be compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    pub id: i64,
    pub namespace: String,
    pub name: String,
    pub featured: bool,
    pub verified: bool,
    pub organization: i64,
    pub author: String,
    pub downloads: i64,
    pub download_string: String,
    pub short_description: String,
    pub rating: Rating,
    #[serde(deserialize_with = "null_as_default")]
    pub changelog: String,
    pub required_labymod_build: i64,
    pub releases: i64,
    pub last_update: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub licence: String,
    pub version_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Vec<String>,
    /// The API does not publish a shape for dependencies, so they are kept as raw JSON.
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_images: Vec<BrandImage>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub count: i64,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandImage {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
}

impl Modification {
    /// Public store page of this modification,
    /// e.g. `https://flintmc.net/modification/42.worldedit`.
    pub fn reference_link(&self, site_base_url: &str) -> String {
        format!(
            "{}/modification/{}.{}",
            site_base_url.trim_end_matches('/'),
            self.id,
            self.namespace
        )
    }
}

// The key still has to be present; only an explicit `null` is accepted.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
