//! Builds akashic-animation curves from keyframe tracks.

use crate::asa::{Attribute, CellValue, Curve, KeyFrame, UserDataValue};
use crate::convert::cell::cell_name;
use crate::convert::easing::{interpolation, CurveScope};
use crate::convert::error::ConvertError;
use crate::convert::keyframe::{resolve, BoneTrack, SlotTrack};
use crate::convert::topology;
use crate::skeleton_data::armature::RawArmatureData;
use crate::skeleton_data::transform::{RawTransform, TransformAttribute};

const HIDDEN_DISPLAY: i32 = -1;
const FULL_ALPHA: f32 = 1.0;

pub fn target_attribute(attribute: TransformAttribute) -> Attribute {
    match attribute {
        TransformAttribute::X => Attribute::Tx,
        TransformAttribute::Y => Attribute::Ty,
        TransformAttribute::SkewX => Attribute::Rz,
        TransformAttribute::ScaleX => Attribute::Sx,
        TransformAttribute::ScaleY => Attribute::Sy,
    }
}

/// One curve per transform attribute, in `tx, ty, rz, sx, sy` order. Key
/// values are the bone's setup pose composed with the animated value.
pub fn transform_curves(track: &BoneTrack, base: &RawTransform, scope: &CurveScope) -> Vec<Curve<f32>> {
    TransformAttribute::ALL
        .iter()
        .map(|&attribute| transform_curve(track, base, attribute, scope))
        .collect()
}

fn transform_curve(
    track: &BoneTrack,
    base: &RawTransform,
    attribute: TransformAttribute,
    scope: &CurveScope,
) -> Curve<f32> {
    let base_value = base.value_or_default(attribute);
    let value_at = |index: usize| {
        let animated = resolve(&track.keys, index, track.fill, |it| it.get(attribute))
            .unwrap_or_else(|| attribute.default_value());
        attribute.compose(base_value, animated)
    };

    let mut curve = Curve::new(target_attribute(attribute));
    for (index, key) in track.keys.iter().enumerate() {
        let value = value_at(index);
        let next_value = if index + 1 < track.keys.len() {
            value_at(index + 1)
        } else {
            value
        };
        let (ip_type, ip_curve) = interpolation(&key.easing, key.duration, value, next_value, scope);
        curve.key_frames.push(KeyFrame {
            time: key.time,
            value,
            ip_type,
            ip_curve,
        });
    }
    curve
}

/// Event, action and sound markers. `None` when the track has none.
pub fn user_data_curve(track: &BoneTrack) -> Option<Curve<UserDataValue>> {
    let mut curve = Curve::new(Attribute::UserData);
    curve.key_frames = track
        .keys
        .iter()
        .filter(|it| !it.user_data.is_empty())
        .map(|it| KeyFrame::held(it.time, it.user_data.clone()))
        .collect();
    if curve.key_frames.is_empty() {
        None
    } else {
        Some(curve)
    }
}

/// Which cell the bone shows over time. A `null` value hides the bone.
pub fn cell_curve(
    track: &SlotTrack,
    armature: &RawArmatureData,
    bone_name: &str,
) -> Result<Curve<Option<CellValue>>, ConvertError> {
    let mut curve = Curve::new(Attribute::Cv);
    for index in 0..track.keys.len() {
        let display_index = resolve(&track.keys, index, track.fill, |it| it.display_index).unwrap_or(0);
        let value = if display_index == HIDDEN_DISPLAY {
            None
        } else {
            Some(cell_value(armature, bone_name, display_index)?)
        };
        curve.key_frames.push(KeyFrame::held(track.keys[index].time, value));
    }
    Ok(curve)
}

fn cell_value(armature: &RawArmatureData, bone_name: &str, display_index: i32) -> Result<CellValue, ConvertError> {
    let out_of_range = || ConvertError::DisplayOutOfRange {
        armature: armature.name.clone(),
        bone: bone_name.to_string(),
        index: display_index,
    };

    let slot_detail = topology::slot_detail_for_bone(armature, bone_name)?.ok_or_else(out_of_range)?;
    let display = usize::try_from(display_index)
        .ok()
        .and_then(|it| slot_detail.displays.get(it))
        .ok_or_else(out_of_range)?;
    if !display.is_image() {
        return Err(ConvertError::InvalidDisplayType {
            armature: armature.name.clone(),
            bone: bone_name.to_string(),
            index: display_index,
            display_type: display.type_name().to_string(),
        });
    }

    let display_name = display.normalized_name();
    Ok(CellValue {
        cell_name: cell_name(&slot_detail.name, &display_name),
        skin_name: display_name,
    })
}

/// Slot opacity, from the color multiplier of the animation only. The
/// slot's setup color is not used.
pub fn alpha_curve(track: &SlotTrack, scope: &CurveScope) -> Curve<f32> {
    let alpha_at = |index: usize| resolve(&track.keys, index, track.fill, |it| it.alpha).unwrap_or(FULL_ALPHA);

    let mut curve = Curve::new(Attribute::Alpha);
    for (index, key) in track.keys.iter().enumerate() {
        let value = alpha_at(index);
        let next_value = if index + 1 < track.keys.len() {
            alpha_at(index + 1)
        } else {
            value
        };
        let (ip_type, ip_curve) = interpolation(&key.easing, key.duration, value, next_value, scope);
        curve.key_frames.push(KeyFrame {
            time: key.time,
            value,
            ip_type,
            ip_curve,
        });
    }
    curve
}
