use serde::{Deserialize, Serialize};

/// One species record, flattened out of the taxonomy tree. Scientific and
/// common names are always non-empty; everything else defaults to the
/// empty string when the source node lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub scientific_name: String,
    pub common_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub distribution: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub reference_url: String,
    #[serde(default)]
    pub family: String,
}

impl CatalogRecord {
    pub fn has_video(&self) -> bool {
        !self.video_url.is_empty()
    }

    pub fn has_reference(&self) -> bool {
        !self.reference_url.is_empty()
    }
}
