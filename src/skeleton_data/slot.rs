use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct RawSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub z: Option<i32>,
    #[serde(rename = "displayIndex")]
    #[serde(default)]
    pub display_index: Option<i32>,
    #[serde(default)]
    #[serde(rename = "color")]
    pub color_transform: crate::shared_types::ColorTransform,
}
