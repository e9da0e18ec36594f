// src/show.rs
use serde::{Deserialize, Serialize};

/// One searchable title as the app keeps it. Identity is `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    /// Poster URL, or the placeholder when the directory has none
    pub image: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Show {
    pub fn new(id: u64, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self { id, name: name.into(), image: image.into(), favorite: false }
    }
}
