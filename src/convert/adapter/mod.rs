//! Turns the two timeline layouts of the exchange format into keyframe
//! tracks.

pub mod dense;
pub mod sparse;

use crate::convert::keyframe::{BoneTrack, SlotTrack};
use crate::skeleton_data::animation::{RawBoneTimeline, RawSlotTimeline};
use crate::skeleton_data::RawVersion;

/// Timeline layout of a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Up to 5.0: every frame repeats the whole transform.
    Dense,
    /// 5.5: per-attribute frame lists that only record changes.
    Sparse,
}

impl Encoding {
    pub fn detect(version: &RawVersion) -> Self {
        match version.as_number() {
            Some(version) if version > 5.0 => Encoding::Sparse,
            _ => Encoding::Dense,
        }
    }

    /// Track of `bone_name` in one animation, `None` when the bone has no
    /// curves of its own. A timeline without frames counts as missing.
    pub fn bone_track(self, bone_name: &str, timeline: Option<&RawBoneTimeline>) -> Option<BoneTrack> {
        match self {
            Encoding::Dense => timeline.map(dense::bone_track).filter(|it| !it.keys.is_empty()),
            Encoding::Sparse => Some(
                timeline
                    .map(sparse::bone_track)
                    .filter(|it| !it.keys.is_empty())
                    .unwrap_or_else(|| sparse::setup_pose_track(bone_name)),
            ),
        }
    }

    pub fn slot_track(self, timeline: &RawSlotTimeline) -> SlotTrack {
        match self {
            Encoding::Dense => dense::slot_track(timeline),
            Encoding::Sparse => sparse::slot_track(timeline),
        }
    }
}
