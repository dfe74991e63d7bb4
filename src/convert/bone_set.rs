use indextree::{Arena, NodeId};

use crate::asa::{Bone, BoneSet};
use crate::convert::error::ConvertError;
use crate::convert::topology::slot_for_bone;
use crate::skeleton_data::bone::RawBone;
use crate::skeleton_data::slot::RawSlot;

/// Z order of a bone: the `z` of the first slot attached to it, `0` for
/// bones without a slot.
pub fn z_order_for_bone(slots: &[RawSlot], bone_name: &str) -> i32 {
    slots
        .iter()
        .find(|it| it.parent == bone_name)
        .and_then(|it| it.z)
        .unwrap_or(0)
}

/// Builds the bone set of an armature.
///
/// The runtime draws bones in array order, so bones are stably sorted by the
/// z order of their slot. Parent indices refer to the sorted order.
pub fn build_bone_set(bones: &[RawBone], slots: &[RawSlot], name: &str) -> Result<BoneSet, ConvertError> {
    for bone in bones.iter() {
        slot_for_bone(name, &bone.name, slots)?;
    }

    let mut sorted: Vec<(i32, &RawBone)> = bones
        .iter()
        .map(|bone| (z_order_for_bone(slots, &bone.name), bone))
        .collect();
    sorted.sort_by_key(|(z, _)| *z);

    let index_of = |bone_name: &str| sorted.iter().position(|(_, it)| it.name == bone_name);
    let bones: Vec<Bone> = sorted
        .iter()
        .enumerate()
        .map(|(array_index, (_, bone))| Bone {
            name: bone.name.clone(),
            array_index,
            parent_index: bone
                .parent
                .as_deref()
                .and_then(index_of)
                .map(|it| it as i32)
                .unwrap_or(-1),
            collider_infos: Vec::new(),
        })
        .collect();

    check_hierarchy(&bones, name)?;

    Ok(BoneSet {
        name: name.to_string(),
        bones,
    })
}

fn check_hierarchy(bones: &[Bone], armature_name: &str) -> Result<(), ConvertError> {
    let mut bone_tree = Arena::new();
    let tree_handles: Vec<NodeId> = bones.iter().map(|it| bone_tree.new_node(it.array_index)).collect();
    for bone in bones.iter().filter(|it| it.parent_index >= 0) {
        let parent_handle = tree_handles[bone.parent_index as usize];
        parent_handle
            .checked_append(tree_handles[bone.array_index], &mut bone_tree)
            .map_err(|_| ConvertError::BoneCycle {
                armature: armature_name.to_string(),
                bone: bone.name.clone(),
            })?;
    }
    Ok(())
}
