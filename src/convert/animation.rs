use indexmap::IndexMap;

use crate::asa::{AnyCurve, Animation, BoneSet, CurveTie};
use crate::convert::adapter::Encoding;
use crate::convert::curves;
use crate::convert::easing::CurveScope;
use crate::convert::error::ConvertError;
use crate::convert::keyframe::SlotTrack;
use crate::convert::topology;
use crate::diagnostics::Diagnostics;
use crate::skeleton_data::animation::RawAnimationData;
use crate::skeleton_data::armature::RawArmatureData;

/// Everything that stays the same across the animations of one armature.
pub struct AnimationContext<'a> {
    pub armature: &'a RawArmatureData,
    pub bone_set: &'a BoneSet,
    pub encoding: Encoding,
    pub fps: u32,
    pub output_user_data: bool,
    pub diagnostics: &'a dyn Diagnostics,
}

/// Builds one animation. Curve ties follow the bone set order, a bone gets
/// a tie when it has a track or carries a slot.
pub fn build_animation(context: &AnimationContext, source: &RawAnimationData) -> Result<Animation, ConvertError> {
    let armature = context.armature;
    if let Some(timeline) = source.bone_timelines.iter().find(|it| armature.bone(&it.bone_name).is_none()) {
        return Err(ConvertError::UnknownBone {
            armature: armature.name.clone(),
            animation: source.name.clone(),
            bone: timeline.bone_name.clone(),
        });
    }

    let mut frame_count = 0;
    let mut curve_ties = IndexMap::new();
    for bone in context.bone_set.bones.iter() {
        let raw_bone = match armature.bone(&bone.name) {
            Some(raw_bone) => raw_bone,
            None => continue,
        };
        let scope = CurveScope {
            armature: &armature.name,
            animation: &source.name,
            bone: &bone.name,
            diagnostics: context.diagnostics,
        };

        let mut curve_tie = CurveTie::new(&bone.name);

        if let Some(track) = context.encoding.bone_track(&bone.name, source.bone_timeline(&bone.name)) {
            for curve in curves::transform_curves(&track, &raw_bone.transform, &scope) {
                curve_tie.curves.push(AnyCurve::Number(curve));
            }
            if context.output_user_data {
                if let Some(curve) = curves::user_data_curve(&track) {
                    curve_tie.curves.push(AnyCurve::UserData(curve));
                }
            }
            frame_count = track.keys.iter().map(|it| it.end_time()).fold(frame_count, u32::max);
        }

        if let Some(slot) = topology::slot_for_bone(&armature.name, &bone.name, &armature.slots)? {
            let track = source
                .slot_timeline(&slot.name)
                .map(|timeline| context.encoding.slot_track(timeline))
                .filter(|it| !it.keys.is_empty())
                .unwrap_or_else(|| SlotTrack::from_setup(slot.display_index));
            curve_tie.curves.push(AnyCurve::Cell(curves::cell_curve(&track, armature, &bone.name)?));
            curve_tie.curves.push(AnyCurve::Number(curves::alpha_curve(&track, &scope)));
            frame_count = track.keys.iter().map(|it| it.end_time()).fold(frame_count, u32::max);
        }

        if !curve_tie.curves.is_empty() {
            curve_ties.insert(bone.name.clone(), curve_tie);
        }
    }

    Ok(Animation {
        name: source.name.clone(),
        fps: context.fps,
        frame_count,
        curve_ties,
    })
}
