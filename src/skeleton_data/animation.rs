use serde::Deserialize;
use crate::shared_types::{default_one_frame, default_name, tween_easing, ColorTransform, TweenEasing};

#[derive(Clone, Deserialize, Debug)]
pub struct RawAnimationData {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(rename = "bone")]
    #[serde(default)]
    pub bone_timelines: Vec<RawBoneTimeline>,
    #[serde(rename = "slot")]
    #[serde(default)]
    pub slot_timelines: Vec<RawSlotTimeline>,
}

impl RawAnimationData {
    pub fn bone_timeline(&self, bone_name: &str) -> Option<&RawBoneTimeline> {
        self.bone_timelines.iter().find(|it| it.bone_name == bone_name)
    }

    pub fn slot_timeline(&self, slot_name: &str) -> Option<&RawSlotTimeline> {
        self.slot_timelines.iter().find(|it| it.slot_name == slot_name)
    }
}

// 5.0 keeps the whole transform on every frame, 5.5 splits it into
// translate/rotate/scale lists and keeps only events in `frame`.
#[derive(Clone, Deserialize, Debug)]
pub struct RawBoneTimeline {
    #[serde(rename = "name")]
    #[serde(default)]
    pub bone_name: String,
    #[serde(rename = "frame")]
    #[serde(default)]
    pub frames: Vec<RawBoneFrame>,
    #[serde(rename = "translateFrame")]
    #[serde(default)]
    pub translate_frames: Vec<RawTranslationFrame>,
    #[serde(rename = "rotateFrame")]
    #[serde(default)]
    pub rotation_frames: Vec<RawRotationFrame>,
    #[serde(rename = "scaleFrame")]
    #[serde(default)]
    pub scale_frames: Vec<RawScaleFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawBoneFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f32>,
    #[serde(rename = "tweenEasing")]
    #[serde(default, deserialize_with = "tween_easing")]
    pub tween_easing: TweenEasing,
    #[serde(default)]
    pub transform: super::transform::RawTransform,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawTranslationFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f32>,
    #[serde(rename = "tweenEasing")]
    #[serde(default, deserialize_with = "tween_easing")]
    pub tween_easing: TweenEasing,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawRotationFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f32>,
    #[serde(rename = "tweenEasing")]
    #[serde(default, deserialize_with = "tween_easing")]
    pub tween_easing: TweenEasing,
    #[serde(default)]
    pub rotate: Option<f32>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawScaleFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f32>,
    #[serde(rename = "tweenEasing")]
    #[serde(default, deserialize_with = "tween_easing")]
    pub tween_easing: TweenEasing,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawSlotTimeline {
    #[serde(rename = "name")]
    #[serde(default)]
    pub slot_name: String,
    #[serde(rename = "frame")]
    #[serde(default)]
    pub frames: Vec<RawSlotFrame>,
    #[serde(rename = "displayFrame")]
    #[serde(default)]
    pub display_frames: Vec<RawDisplayFrame>,
    #[serde(rename = "colorFrame")]
    #[serde(default)]
    pub color_frames: Vec<RawColorFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawSlotFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f32>,
    #[serde(rename = "tweenEasing")]
    #[serde(default, deserialize_with = "tween_easing")]
    pub tween_easing: TweenEasing,
    #[serde(rename = "displayIndex")]
    #[serde(default)]
    pub display_index: Option<i32>,
    #[serde(default)]
    pub color: ColorTransform,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawDisplayFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub value: Option<i32>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawColorFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f32>,
    #[serde(rename = "tweenEasing")]
    #[serde(default, deserialize_with = "tween_easing")]
    pub tween_easing: TweenEasing,
    #[serde(rename = "value")]
    #[serde(default)]
    pub color: ColorTransform,
}
