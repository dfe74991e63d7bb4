//! Merges the per-attribute frame lists of 5.5 documents into one track.
//!
//! Every list is laid out on its own time axis starting at 0. Frames of all
//! lists that start at the same time end up in the same key. A key only
//! records the attributes its frames set, the rest is carried forward when
//! curves are built.

use crate::convert::keyframe::{BoneTrack, Easing, Fill, SlotKey, SlotTrack, TransformKey};
use crate::shared_types::TweenEasing;
use crate::skeleton_data::animation::{
    RawBoneFrame, RawBoneTimeline, RawColorFrame, RawDisplayFrame, RawRotationFrame, RawScaleFrame,
    RawSlotTimeline, RawTranslationFrame,
};
use crate::skeleton_data::transform::TransformAttribute;

trait SparseFrame {
    fn duration(&self) -> u32;

    /// `None` when the frame leaves the easing of its key alone.
    fn easing(&self) -> Option<Easing> {
        None
    }
}

fn frame_easing(tween_easing: TweenEasing, curve: &[f32]) -> Option<Easing> {
    if tween_easing == TweenEasing::Unset && curve.is_empty() {
        None
    } else {
        Some(Easing::new(tween_easing, curve))
    }
}

macro_rules! eased_frame {
    ($frame:ty) => {
        impl SparseFrame for $frame {
            fn duration(&self) -> u32 {
                self.duration
            }

            fn easing(&self) -> Option<Easing> {
                frame_easing(self.tween_easing, &self.curve)
            }
        }
    };
}

eased_frame!(RawTranslationFrame);
eased_frame!(RawRotationFrame);
eased_frame!(RawScaleFrame);
eased_frame!(RawBoneFrame);
eased_frame!(RawColorFrame);

impl SparseFrame for RawDisplayFrame {
    fn duration(&self) -> u32 {
        self.duration
    }
}

/// Attributes set by a translate frame.
pub fn translation_values(frame: &RawTranslationFrame) -> [(TransformAttribute, Option<f32>); 2] {
    [(TransformAttribute::X, frame.x), (TransformAttribute::Y, frame.y)]
}

/// Attributes set by a rotate frame. Rotation is stored as skew.
pub fn rotation_values(frame: &RawRotationFrame) -> [(TransformAttribute, Option<f32>); 1] {
    [(TransformAttribute::SkewX, frame.rotate)]
}

/// Attributes set by a scale frame.
pub fn scale_values(frame: &RawScaleFrame) -> [(TransformAttribute, Option<f32>); 2] {
    [(TransformAttribute::ScaleX, frame.x), (TransformAttribute::ScaleY, frame.y)]
}

trait Bucket {
    fn starting_at(time: u32) -> Self;
    fn time(&self) -> u32;
    fn set_timing(&mut self, duration: u32, easing: Option<Easing>);
}

impl Bucket for TransformKey {
    fn starting_at(time: u32) -> Self {
        TransformKey::new(time, 0)
    }

    fn time(&self) -> u32 {
        self.time
    }

    fn set_timing(&mut self, duration: u32, easing: Option<Easing>) {
        self.duration = duration;
        if let Some(easing) = easing {
            self.easing = easing;
        }
    }
}

impl Bucket for SlotKey {
    fn starting_at(time: u32) -> Self {
        SlotKey {
            time,
            ..SlotKey::default()
        }
    }

    fn time(&self) -> u32 {
        self.time
    }

    fn set_timing(&mut self, duration: u32, easing: Option<Easing>) {
        self.duration = duration;
        if let Some(easing) = easing {
            self.easing = easing;
        }
    }
}

fn bucket_at<K: Bucket>(keys: &mut Vec<K>, time: u32) -> &mut K {
    let index = match keys.binary_search_by_key(&time, |it| it.time()) {
        Ok(index) => index,
        Err(index) => {
            keys.insert(index, K::starting_at(time));
            index
        }
    };
    &mut keys[index]
}

/// Returns where the list ends.
fn merge<K: Bucket, F: SparseFrame>(keys: &mut Vec<K>, frames: &[F], apply: impl Fn(&mut K, &F)) -> u32 {
    let mut time = 0;
    for frame in frames.iter() {
        let key = bucket_at(keys, time);
        key.set_timing(frame.duration(), frame.easing());
        apply(key, frame);
        time += frame.duration();
    }
    time
}

/// A key lasts until the next one starts, the last key lasts until the
/// longest list ends.
fn close_gaps<K: Bucket>(keys: &mut [K], end_time: u32) {
    for index in 1..keys.len() {
        let gap = keys[index].time() - keys[index - 1].time();
        keys[index - 1].set_timing(gap, None);
    }
    if let Some(last) = keys.last_mut() {
        let remaining = end_time.saturating_sub(last.time());
        last.set_timing(remaining, None);
    }
}

pub fn bone_track(timeline: &RawBoneTimeline) -> BoneTrack {
    let mut keys: Vec<TransformKey> = Vec::new();
    let end_times = [
        merge(&mut keys, &timeline.translate_frames, |key, frame| {
            translation_values(frame).iter().for_each(|(attribute, value)| key.set(*attribute, *value))
        }),
        merge(&mut keys, &timeline.rotation_frames, |key, frame| {
            rotation_values(frame).iter().for_each(|(attribute, value)| key.set(*attribute, *value))
        }),
        merge(&mut keys, &timeline.scale_frames, |key, frame| {
            scale_values(frame).iter().for_each(|(attribute, value)| key.set(*attribute, *value))
        }),
        merge(&mut keys, &timeline.frames, |key, frame| {
            key.user_data = super::dense::user_data(frame);
        }),
    ];
    close_gaps(&mut keys, end_times.iter().copied().max().unwrap_or(0));

    BoneTrack {
        bone_name: timeline.bone_name.clone(),
        keys,
        fill: Fill::CarryForward,
    }
}

/// Track of a bone the animation does not mention: the setup pose, held.
pub fn setup_pose_track(bone_name: &str) -> BoneTrack {
    let mut key = TransformKey::new(0, 1);
    key.easing = Easing::linear();
    BoneTrack {
        bone_name: bone_name.to_string(),
        keys: vec![key],
        fill: Fill::CarryForward,
    }
}

pub fn slot_track(timeline: &RawSlotTimeline) -> SlotTrack {
    let mut keys: Vec<SlotKey> = Vec::new();
    let display_end = merge(&mut keys, &timeline.display_frames, |key, frame: &RawDisplayFrame| {
        if frame.value.is_some() {
            key.display_index = frame.value;
        }
    });
    let color_end = merge(&mut keys, &timeline.color_frames, |key, frame: &RawColorFrame| {
        if let Some(alpha) = frame.color.alpha() {
            key.alpha = Some(alpha);
        }
    });
    close_gaps(&mut keys, display_end.max(color_end));

    SlotTrack {
        keys,
        fill: Fill::CarryForward,
    }
}
