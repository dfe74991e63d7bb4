use crate::asa::UserDataValue;
use crate::convert::keyframe::{BoneTrack, Easing, Fill, SlotKey, SlotTrack, TransformKey};
use crate::skeleton_data::animation::{RawBoneFrame, RawBoneTimeline, RawSlotTimeline};
use crate::skeleton_data::transform::TransformAttribute;

pub fn bone_track(timeline: &RawBoneTimeline) -> BoneTrack {
    let mut time = 0;
    let keys = timeline
        .frames
        .iter()
        .map(|frame| {
            let mut key = TransformKey::new(time, frame.duration);
            for attribute in TransformAttribute::ALL.iter() {
                key.set(*attribute, frame.transform.get(*attribute));
            }
            key.easing = Easing::new(frame.tween_easing, &frame.curve);
            key.user_data = user_data(frame);
            time += frame.duration;
            key
        })
        .collect();

    BoneTrack {
        bone_name: timeline.bone_name.clone(),
        keys,
        fill: Fill::Default,
    }
}

pub fn slot_track(timeline: &RawSlotTimeline) -> SlotTrack {
    let mut time = 0;
    let keys = timeline
        .frames
        .iter()
        .map(|frame| {
            let key = SlotKey {
                time,
                duration: frame.duration,
                display_index: frame.display_index,
                alpha: frame.color.alpha(),
                easing: Easing::new(frame.tween_easing, &frame.curve),
            };
            time += frame.duration;
            key
        })
        .collect();

    SlotTrack {
        keys,
        fill: Fill::Default,
    }
}

pub(super) fn user_data(frame: &RawBoneFrame) -> UserDataValue {
    UserDataValue {
        event: frame.event.clone(),
        action: frame.action.clone(),
        sound: frame.sound.clone(),
    }
}
