use std::path::Path;

use serde::Deserialize;
use crate::skeleton_data::transform::RawTransform;

#[derive(Clone, Deserialize, Debug)]
pub struct RawSkinData {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "slot")]
    #[serde(default)]
    pub slots: Vec<RawSkinSlot>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawSkinSlot {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "display")]
    #[serde(default)]
    pub displays: Vec<RawDisplay>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawDisplay {
    #[serde(default)]
    pub name: String,

    // Image displays may omit the tag.
    #[serde(rename = "type")]
    #[serde(default)]
    pub display_type: Option<String>,

    #[serde(default)]
    pub transform: RawTransform,
}

impl RawDisplay {
    pub fn is_image(&self) -> bool {
        match &self.display_type {
            None => true,
            Some(tag) => tag == "image",
        }
    }

    pub fn type_name(&self) -> &str {
        self.display_type.as_deref().unwrap_or("image")
    }

    /// Display names may contain a sub-path and an extension, only the file
    /// stem is used to match texture files and to name cells.
    pub fn normalized_name(&self) -> String {
        normalize_display_name(&self.name)
    }
}

pub fn normalize_display_name(display_name: &str) -> String {
    Path::new(display_name)
        .file_stem()
        .map(|it| it.to_string_lossy().into_owned())
        .unwrap_or_default()
}
