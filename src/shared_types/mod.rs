use serde::{Deserialize, Deserializer};

#[derive(Copy, Clone, Deserialize, Default, Debug, PartialEq)]
pub struct ColorTransform {
    #[serde(rename = "aM")]
    #[serde(default)]
    pub alpha_multiplier: Option<f32>,
    #[serde(rename = "rM")]
    #[serde(default)]
    pub red_multiplier: Option<f32>,
    #[serde(rename = "gM")]
    #[serde(default)]
    pub green_multiplier: Option<f32>,
    #[serde(rename = "bM")]
    #[serde(default)]
    pub blue_multiplier: Option<f32>,
}

impl ColorTransform {
    /// Alpha normalized to `0.0..=1.0`, `None` when the multiplier is not given.
    pub fn alpha(&self) -> Option<f32> {
        self.alpha_multiplier.map(|it| it / 100.0)
    }
}

/// `tweenEasing` has three distinct states in the exchange format: the key
/// may be missing, may be `null`, or may hold a number.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TweenEasing {
    Unset,
    Null,
    Value(f32),
}

impl Default for TweenEasing {
    fn default() -> Self {
        Self::Unset
    }
}

// Only called when the key is present, absence is handled by `#[serde(default)]`.
pub(crate) fn tween_easing<'de, D>(deserializer: D) -> Result<TweenEasing, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f32> = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        None => TweenEasing::Null,
        Some(v) => TweenEasing::Value(v),
    })
}

pub(crate) fn default_one_frame() -> u32 { 1 }
pub(crate) fn default_name() -> String { "default".into() }
pub(crate) fn default_frame_rate() -> u32 { 24 }
