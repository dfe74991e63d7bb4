//! Conversion of a parsed DragonBones document into akashic-animation assets.
//!
//! Nothing in here touches the filesystem: texture sizes come in with the
//! document and the result is an in-memory [`Project`].

pub mod adapter;
pub mod animation;
pub mod bezier;
pub mod bone_set;
pub mod cell;
pub mod curves;
pub mod easing;
pub mod error;
pub mod keyframe;
pub mod topology;

use serde::Serialize;

use crate::asa::{Animation, BoneSet, Skin};
use crate::convert::adapter::Encoding;
use crate::convert::animation::{build_animation, AnimationContext};
use crate::convert::error::ConvertError;
use crate::diagnostics::{Diagnostic, Diagnostics, NoopDiagnostics};
use crate::options::Options;
use crate::skeleton_data::armature::RawArmatureData;
use crate::skeleton_data::RawSkeletonData;

/// A texture image found next to the document.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureInfo {
    /// Path of the image, relative to the project directory.
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    /// Skin name of the texture: its file name without directory and
    /// extension.
    pub fn skin_name(&self) -> String {
        crate::skeleton_data::skin::normalize_display_name(&self.file_name)
    }
}

pub struct ConvertInput {
    pub name: String,
    pub document: RawSkeletonData,
    pub textures: Vec<TextureInfo>,
}

/// Assets that are meant to be used together.
#[derive(Clone, Serialize, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CombinationInfo {
    // Holds the bone set name, the key name is what existing readers expect.
    #[serde(rename = "boneName")]
    pub bone_set_name: String,
    pub animation_names: Vec<String>,
    pub skin_names: Vec<String>,
}

#[derive(Clone, Serialize, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFileInfo {
    pub bone_set_file_names: Vec<String>,
    pub skin_file_names: Vec<String>,
    pub animation_file_names: Vec<String>,
    pub image_file_names: Vec<String>,
}

#[derive(Clone, Serialize, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_info: Option<Vec<CombinationInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_file_info: Option<RelatedFileInfo>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub name: String,
    pub skins: Vec<Skin>,
    pub bone_sets: Vec<BoneSet>,
    pub animations: Vec<Animation>,
    pub image_file_names: Vec<String>,
    /// Present when combination or related file info was requested.
    pub user_data: Option<ProjectUserData>,
}

pub struct Converter<'a> {
    options: Options,
    diagnostics: Box<dyn Diagnostics + 'a>,
}

impl<'a> Converter<'a> {
    pub fn new(options: Options) -> Self {
        Self::with_diagnostics(options, NoopDiagnostics)
    }

    pub fn with_diagnostics(options: Options, diagnostics: impl Diagnostics + 'a) -> Self {
        Self {
            options,
            diagnostics: Box::new(diagnostics),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Converts every armature of the document. Armatures that use IK are
    /// skipped with a diagnostic, any other problem fails the whole
    /// conversion.
    pub fn convert(&self, input: &ConvertInput) -> Result<Project, ConvertError> {
        let document = &input.document;
        let encoding = Encoding::detect(&document.version);

        let mut project = Project {
            name: input.name.clone(),
            skins: Vec::new(),
            bone_sets: Vec::new(),
            animations: Vec::new(),
            image_file_names: Vec::new(),
            user_data: if self.options.needs_user_data() {
                Some(ProjectUserData::default())
            } else {
                None
            },
        };

        // Skins exist before any armature so that every armature can add
        // cells to every texture.
        for texture in input.textures.iter() {
            project.skins.push(Skin::new(&texture.skin_name(), texture.width, texture.height));
            project.image_file_names.push(texture.file_name.clone());
        }

        let mut combination_info = Vec::new();
        for armature in document.armatures.iter() {
            if armature.has_ik() {
                self.diagnostics.report(Diagnostic::IkSkipped {
                    armature: armature.name.clone(),
                });
                continue;
            }
            let combination = self.convert_armature(document, armature, encoding, &mut project)?;
            combination_info.push(combination);
        }

        if self.options.output_combo_info {
            if let Some(user_data) = project.user_data.as_mut() {
                user_data.combination_info = Some(combination_info);
            }
        }

        Ok(project)
    }

    fn convert_armature(
        &self,
        document: &RawSkeletonData,
        armature: &RawArmatureData,
        encoding: Encoding,
        project: &mut Project,
    ) -> Result<CombinationInfo, ConvertError> {
        let bone_set = bone_set::build_bone_set(&armature.bones, &armature.slots, &armature.name)?;
        let mut combination = CombinationInfo {
            bone_set_name: bone_set.name.clone(),
            ..CombinationInfo::default()
        };

        let context = AnimationContext {
            armature,
            bone_set: &bone_set,
            encoding,
            fps: document.frame_rate_for(armature),
            output_user_data: self.options.output_user_data,
            diagnostics: &*self.diagnostics,
        };
        for source in armature.animations.iter() {
            let mut animation = build_animation(&context, source)?;
            if self.options.asaan_long_name {
                animation.name = format!("{}_{}", armature.name, animation.name);
            }
            combination.animation_names.push(animation.name.clone());
            project.animations.push(animation);
        }

        for skin in project.skins.iter_mut() {
            if cell::create_cells_on_skin(armature, skin) {
                combination.skin_names.push(skin.name.clone());
            }
        }

        self.diagnostics.report(Diagnostic::ArmatureConverted {
            armature: armature.name.clone(),
            animations: armature.animations.len(),
        });
        project.bone_sets.push(bone_set);
        Ok(combination)
    }
}
