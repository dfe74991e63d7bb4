//! Keyframe streams shared by both source encodings.
//!
//! Each adapter turns its own timeline layout into these tracks, the curve
//! builders only ever read tracks.

use crate::asa::UserDataValue;
use crate::shared_types::TweenEasing;
use crate::skeleton_data::transform::TransformAttribute;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Easing {
    pub tween_easing: TweenEasing,
    pub curve: Vec<f32>,
}

impl Easing {
    pub fn new(tween_easing: TweenEasing, curve: &[f32]) -> Self {
        Self {
            tween_easing,
            curve: curve.to_vec(),
        }
    }

    pub fn linear() -> Self {
        Self::new(TweenEasing::Value(0.0), &[])
    }
}

/// What a key without an explicit value for an attribute resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fill {
    /// The attribute's default.
    Default,
    /// The closest earlier explicit value, then the default.
    CarryForward,
}

/// Walks back from `index` to the value a key resolves to.
pub fn resolve<K, T: Copy>(keys: &[K], index: usize, fill: Fill, get: impl Fn(&K) -> Option<T>) -> Option<T> {
    if let Some(value) = get(&keys[index]) {
        return Some(value);
    }
    match fill {
        Fill::Default => None,
        Fill::CarryForward => keys[..index].iter().rev().find_map(|it| get(it)),
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct TransformKey {
    pub time: u32,
    pub duration: u32,
    /// Animated offsets indexed by [`TransformAttribute::index`].
    pub values: [Option<f32>; 5],
    pub easing: Easing,
    pub user_data: UserDataValue,
}

impl TransformKey {
    pub fn new(time: u32, duration: u32) -> Self {
        Self {
            time,
            duration,
            ..Self::default()
        }
    }

    pub fn get(&self, attribute: TransformAttribute) -> Option<f32> {
        self.values[attribute.index()]
    }

    pub fn set(&mut self, attribute: TransformAttribute, value: Option<f32>) {
        if value.is_some() {
            self.values[attribute.index()] = value;
        }
    }

    pub fn end_time(&self) -> u32 {
        self.time + self.duration
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoneTrack {
    pub bone_name: String,
    pub keys: Vec<TransformKey>,
    pub fill: Fill,
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct SlotKey {
    pub time: u32,
    pub duration: u32,
    pub display_index: Option<i32>,
    pub alpha: Option<f32>,
    pub easing: Easing,
}

impl SlotKey {
    pub fn end_time(&self) -> u32 {
        self.time + self.duration
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotTrack {
    pub keys: Vec<SlotKey>,
    pub fill: Fill,
}

impl SlotTrack {
    /// One key showing the slot's setup display, for slots the animation
    /// does not touch.
    pub fn from_setup(display_index: Option<i32>) -> Self {
        Self {
            keys: vec![SlotKey {
                time: 0,
                duration: 1,
                display_index,
                alpha: None,
                easing: Easing::linear(),
            }],
            fill: Fill::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[Option<f32>]) -> Vec<TransformKey> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let mut key = TransformKey::new(i as u32, 1);
                key.set(TransformAttribute::SkewX, *value);
                key
            })
            .collect()
    }

    #[test]
    fn carry_forward_uses_the_closest_earlier_value() {
        let keys = keys(&[Some(0.2), None, Some(0.5), None, None]);
        let get = |it: &TransformKey| it.get(TransformAttribute::SkewX);
        assert_eq!(resolve(&keys, 1, Fill::CarryForward, get), Some(0.2));
        assert_eq!(resolve(&keys, 4, Fill::CarryForward, get), Some(0.5));
        assert_eq!(resolve(&keys, 1, Fill::Default, get), None);
    }

    #[test]
    fn carry_forward_without_history_is_unset() {
        let keys = keys(&[None, Some(1.0)]);
        assert_eq!(
            resolve(&keys, 0, Fill::CarryForward, |it| it.get(TransformAttribute::SkewX)),
            None
        );
    }

    #[test]
    fn explicit_zero_is_not_carried_over() {
        let keys = keys(&[Some(0.7), Some(0.0)]);
        assert_eq!(
            resolve(&keys, 1, Fill::CarryForward, |it| it.get(TransformAttribute::SkewX)),
            Some(0.0)
        );
    }
}
