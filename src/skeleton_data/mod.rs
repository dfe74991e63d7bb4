pub mod armature;
pub mod bone;
pub mod transform;
pub mod slot;
pub mod animation;
pub mod skin;
pub mod ik;

use serde::Deserialize;
use crate::shared_types::default_frame_rate;

#[derive(Clone, Deserialize, Debug)]
pub struct RawSkeletonData {
    #[serde(rename = "frameRate")]
    #[serde(default)]
    pub frame_rate: Option<u32>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: RawVersion,

    #[serde(rename = "armature")]
    #[serde(default)]
    pub armatures: Vec<crate::skeleton_data::armature::RawArmatureData>,
}

impl RawSkeletonData {
    pub fn parse(raw_bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw_bytes)
    }

    /// Frame rate of `armature`'s animations: the document's, then the
    /// armature's own, then the format default.
    pub fn frame_rate_for(&self, armature: &armature::RawArmatureData) -> u32 {
        self.frame_rate
            .or(armature.frame_rate)
            .unwrap_or_else(default_frame_rate)
    }
}

/// Exporters write the version either as `"5.5"` or as `5.5`.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawVersion {
    Number(f64),
    Text(String),
}

impl Default for RawVersion {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawVersion {
    /// Numeric value of the version, `None` when it is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawVersion::Number(n) => Some(*n),
            RawVersion::Text(s) => s.trim().parse().ok(),
        }
    }
}
