use crate::asa::{Cell, Point, Size, Skin};
use crate::skeleton_data::armature::RawArmatureData;
use crate::skeleton_data::transform::TransformAttribute;

pub fn cell_name(slot_name: &str, display_name: &str) -> String {
    format!("{}_{}", slot_name, display_name)
}

/// Adds to `skin` a cell for every display of the armature that shows the
/// skin's image. Returns whether any cell was added.
///
/// Cells always span the whole image. A cell whose name is already taken
/// replaces the earlier one.
pub fn create_cells_on_skin(armature: &RawArmatureData, skin: &mut Skin) -> bool {
    let source_skin = match armature.primary_skin() {
        Some(source_skin) => source_skin,
        None => return false,
    };

    let width = skin.image_size_w as f32;
    let height = skin.image_size_h as f32;
    let mut created = false;

    for slot in source_skin.slots.iter() {
        for display in slot.displays.iter() {
            let display_name = display.normalized_name();
            if display_name != skin.name {
                continue;
            }

            // The display offset moves the content, the pivot moves the anchor.
            let offset_x = display.transform.value_or_default(TransformAttribute::X);
            let offset_y = display.transform.value_or_default(TransformAttribute::Y);

            skin.insert_cell(Cell {
                name: cell_name(&slot.name, &display_name),
                pos: Point { x: 0.0, y: 0.0 },
                size: Size { width, height },
                pivot: Point {
                    x: -offset_x / width,
                    y: -offset_y / height,
                },
                // Approximation: the display skew is used as the rotation.
                rz: display.transform.value_or_default(TransformAttribute::SkewX),
            });
            created = true;
        }
    }

    created
}
