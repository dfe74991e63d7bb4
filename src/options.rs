use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Prefixes used by `--add-prefix`.
pub const STANDARD_PREFIXES: &str = "pj_,bn_,sk_,an_";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    #[error("too few prefixes: expected 4 (project, bone set, skin, animation), got {0}")]
    TooFewPrefixes(usize),
    #[error("invalid config file: {0}")]
    Config(String),
}

/// File name prefixes, one per output file kind.
#[derive(Clone, Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Prefixes {
    pub project: String,
    pub bone_set: String,
    pub skin: String,
    pub animation: String,
}

impl Prefixes {
    pub fn standard() -> Self {
        // The constant always has four entries.
        STANDARD_PREFIXES.parse().unwrap_or_default()
    }
}

impl FromStr for Prefixes {
    type Err = OptionsError;

    /// Parses `"pj_,bn_,sk_,an_"`. Entries past the fourth are ignored.
    fn from_str(list: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> = list.split(',').collect();
        if entries.len() < 4 {
            return Err(OptionsError::TooFewPrefixes(entries.len()));
        }
        Ok(Self {
            project: entries[0].to_string(),
            bone_set: entries[1].to_string(),
            skin: entries[2].to_string(),
            animation: entries[3].to_string(),
        })
    }
}

#[derive(Clone, Deserialize, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Animations are named `armature_animation`.
    pub asaan_long_name: bool,
    /// Emit `userData` curves for frame events, actions and sounds.
    pub output_user_data: bool,
    /// Record which bone set, animations and skins belong together.
    pub output_combo_info: bool,
    /// List every written file in the project manifest.
    pub output_related_file_info: bool,
    pub prefixes: Prefixes,
    pub verbose: bool,
}

impl Options {
    /// Reads options written in RON. Missing fields keep their defaults.
    pub fn from_ron(raw_bytes: &[u8]) -> Result<Self, OptionsError> {
        ron::de::from_reader(raw_bytes).map_err(|e| OptionsError::Config(e.to_string()))
    }

    pub fn needs_user_data(&self) -> bool {
        self.output_combo_info || self.output_related_file_info
    }
}
