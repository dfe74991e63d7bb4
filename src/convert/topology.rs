use crate::convert::error::ConvertError;
use crate::skeleton_data::armature::RawArmatureData;
use crate::skeleton_data::skin::RawSkinSlot;
use crate::skeleton_data::slot::RawSlot;

/// The slot attached to `bone_name`, `None` for a bare joint. A bone may
/// carry at most one slot in the target format.
pub fn slot_for_bone<'a>(
    armature_name: &str,
    bone_name: &str,
    slots: &'a [RawSlot],
) -> Result<Option<&'a RawSlot>, ConvertError> {
    let mut found = None;
    for slot in slots.iter().filter(|it| it.parent == bone_name) {
        if found.is_some() {
            return Err(ConvertError::MultipleSlots {
                armature: armature_name.to_string(),
                bone: bone_name.to_string(),
            });
        }
        found = Some(slot);
    }
    Ok(found)
}

/// Display list of the slot attached to `bone_name`, taken from the
/// armature's first skin.
pub fn slot_detail_for_bone<'a>(
    armature: &'a RawArmatureData,
    bone_name: &str,
) -> Result<Option<&'a RawSkinSlot>, ConvertError> {
    let slot = match slot_for_bone(&armature.name, bone_name, &armature.slots)? {
        Some(slot) => slot,
        None => return Ok(None),
    };
    Ok(armature
        .primary_skin()
        .and_then(|skin| skin.slots.iter().find(|it| it.name == slot.name)))
}
