use serde::Deserialize;

/// A transform as written in the exchange format. Every field is optional so
/// that an explicit `0` stays distinguishable from an omitted value.
#[derive(Copy, Clone, Deserialize, Default, Debug, PartialEq)]
pub struct RawTransform {
    #[serde(default)]
    pub x: Option<f32>,

    #[serde(default)]
    pub y: Option<f32>,

    #[serde(default)]
    #[serde(rename = "skX")]
    pub skew_x: Option<f32>,

    #[serde(default)]
    #[serde(rename = "skY")]
    pub skew_y: Option<f32>,

    #[serde(default)]
    #[serde(rename = "scX")]
    pub scale_x: Option<f32>,

    #[serde(default)]
    #[serde(rename = "scY")]
    pub scale_y: Option<f32>,
}

impl RawTransform {
    pub fn get(&self, attribute: TransformAttribute) -> Option<f32> {
        match attribute {
            TransformAttribute::X => self.x,
            TransformAttribute::Y => self.y,
            TransformAttribute::SkewX => self.skew_x,
            TransformAttribute::ScaleX => self.scale_x,
            TransformAttribute::ScaleY => self.scale_y,
        }
    }

    /// The explicit value of `attribute`, or its default when omitted.
    pub fn value_or_default(&self, attribute: TransformAttribute) -> f32 {
        self.get(attribute).unwrap_or_else(|| attribute.default_value())
    }
}

/// The transform attributes that are animated, in output order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransformAttribute {
    X,
    Y,
    SkewX,
    ScaleX,
    ScaleY,
}

impl TransformAttribute {
    pub const ALL: [TransformAttribute; 5] = [
        TransformAttribute::X,
        TransformAttribute::Y,
        TransformAttribute::SkewX,
        TransformAttribute::ScaleX,
        TransformAttribute::ScaleY,
    ];

    pub fn index(self) -> usize {
        match self {
            TransformAttribute::X => 0,
            TransformAttribute::Y => 1,
            TransformAttribute::SkewX => 2,
            TransformAttribute::ScaleX => 3,
            TransformAttribute::ScaleY => 4,
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            TransformAttribute::ScaleX | TransformAttribute::ScaleY => 1.0,
            _ => 0.0,
        }
    }

    /// Animated values are offsets for translation and rotation and factors
    /// for scale.
    pub fn compose(self, base: f32, delta: f32) -> f32 {
        match self {
            TransformAttribute::ScaleX | TransformAttribute::ScaleY => base * delta,
            _ => base + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_composes_multiplicatively() {
        assert_eq!(TransformAttribute::ScaleX.compose(2.0, 1.5), 3.0);
        assert_eq!(TransformAttribute::ScaleY.compose(2.0, 1.5), 3.0);
    }

    #[test]
    fn translation_and_rotation_compose_additively() {
        assert_eq!(TransformAttribute::X.compose(5.0, -2.0), 3.0);
        assert_eq!(TransformAttribute::Y.compose(5.0, -2.0), 3.0);
        assert_eq!(TransformAttribute::SkewX.compose(5.0, -2.0), 3.0);
    }

    #[test]
    fn explicit_zero_scale_is_kept() {
        let transform: RawTransform = serde_json::from_str(r#"{"scX": 0}"#).unwrap();
        assert_eq!(transform.value_or_default(TransformAttribute::ScaleX), 0.0);
        assert_eq!(transform.value_or_default(TransformAttribute::ScaleY), 1.0);
    }
}
