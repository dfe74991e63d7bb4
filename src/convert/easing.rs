use crate::asa::{IpCurve, IpType};
use crate::convert::bezier;
use crate::convert::keyframe::Easing;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::shared_types::TweenEasing;

/// Where the key frames being converted come from, for diagnostics.
#[derive(Copy, Clone)]
pub struct CurveScope<'a> {
    pub armature: &'a str,
    pub animation: &'a str,
    pub bone: &'a str,
    pub diagnostics: &'a dyn Diagnostics,
}

impl<'a> CurveScope<'a> {
    fn truncated_curve(&self, len: usize) {
        self.diagnostics.report(Diagnostic::TruncatedCurve {
            armature: self.armature.to_string(),
            animation: self.animation.to_string(),
            bone: self.bone.to_string(),
            len,
        });
    }

    fn unsupported_easing(&self, easing: f32) {
        self.diagnostics.report(Diagnostic::UnsupportedEasing {
            armature: self.armature.to_string(),
            animation: self.animation.to_string(),
            bone: self.bone.to_string(),
            easing,
        });
    }
}

/// Interpolation of the segment that starts at a key frame with value `sy`
/// and ends at the next one with value `ey`.
///
/// A `None` type holds the value until the next key frame.
pub fn interpolation(
    easing: &Easing,
    duration: u32,
    sy: f32,
    ey: f32,
    scope: &CurveScope,
) -> (Option<IpType>, Option<IpCurve>) {
    let curve = &easing.curve;
    if curve.len() >= 4 {
        if curve.len() > 4 {
            scope.truncated_curve(curve.len());
        }
        let control_points = [curve[0], curve[1], curve[2], curve[3]];
        let values = bezier::remap(control_points, duration as f32, sy, ey);
        return (Some(IpType::Bezier), Some(IpCurve { values }));
    }
    if !curve.is_empty() {
        scope.truncated_curve(curve.len());
    }

    match easing.tween_easing {
        TweenEasing::Null => (None, None),
        TweenEasing::Unset => (Some(IpType::Linear), None),
        TweenEasing::Value(value) => {
            if value != 0.0 {
                scope.unsupported_easing(value);
            }
            (Some(IpType::Linear), None)
        }
    }
}
