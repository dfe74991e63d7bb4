use thiserror::Error;

/// Source data the converter can not express. Any of these aborts the whole
/// conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error("multiple slots are not supported. armature name={armature}, bone name={bone}")]
    MultipleSlots { armature: String, bone: String },

    #[error("invalid display type {display_type}. armature name={armature}, bone name={bone}, display index={index}")]
    InvalidDisplayType {
        armature: String,
        bone: String,
        index: i32,
        display_type: String,
    },

    #[error("display index {index} out of range. armature name={armature}, bone name={bone}")]
    DisplayOutOfRange {
        armature: String,
        bone: String,
        index: i32,
    },

    #[error("animation {animation} refers to unknown bone {bone}. armature name={armature}")]
    UnknownBone {
        armature: String,
        animation: String,
        bone: String,
    },

    #[error("bone hierarchy loops through bone {bone}. armature name={armature}")]
    BoneCycle { armature: String, bone: String },
}
