//! Lays a converted project out as files. Everything is rendered in memory
//! so that nothing is written when rendering fails.

use serde::Serialize;

use crate::asa::Container;
use crate::convert::{Project, ProjectUserData, RelatedFileInfo};
use crate::options::Prefixes;

pub const PROJECT_EXT: &str = ".asapj";
pub const BONE_SET_EXT: &str = ".asabn";
pub const SKIN_EXT: &str = ".asask";
pub const ANIMATION_EXT: &str = ".asaan";

#[derive(Clone, Debug, PartialEq)]
pub struct OutputFile {
    pub file_name: String,
    pub contents: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectManifest {
    bone_set_file_names: Vec<String>,
    skin_file_names: Vec<String>,
    animation_file_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<ProjectUserData>,
}

/// Every file of a project: bone sets, skins, animations and, last, the
/// project manifest.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ProjectFiles {
    pub files: Vec<OutputFile>,
}

impl ProjectFiles {
    pub fn build(project: &Project, prefixes: &Prefixes, related_file_info: bool) -> Result<Self, serde_json::Error> {
        let mut files = Vec::new();
        let bone_set_file_names = render_all(
            &mut files,
            project.bone_sets.iter().map(|it| (it.name.as_str(), it)),
            &prefixes.bone_set,
            BONE_SET_EXT,
        )?;
        let skin_file_names = render_all(
            &mut files,
            project.skins.iter().map(|it| (it.name.as_str(), it)),
            &prefixes.skin,
            SKIN_EXT,
        )?;
        let animation_file_names = render_all(
            &mut files,
            project.animations.iter().map(|it| (it.name.as_str(), it)),
            &prefixes.animation,
            ANIMATION_EXT,
        )?;

        let mut user_data = project.user_data.clone();
        if related_file_info {
            user_data.get_or_insert_with(ProjectUserData::default).related_file_info = Some(RelatedFileInfo {
                bone_set_file_names: bone_set_file_names.clone(),
                skin_file_names: skin_file_names.clone(),
                animation_file_names: animation_file_names.clone(),
                image_file_names: project.image_file_names.clone(),
            });
        }

        let manifest = ProjectManifest {
            bone_set_file_names,
            skin_file_names,
            animation_file_names,
            user_data,
        };
        files.push(OutputFile {
            file_name: file_name(&prefixes.project, &project.name, PROJECT_EXT),
            contents: serde_json::to_string(&Container::new(&manifest))?,
        });

        Ok(Self { files })
    }

    pub fn file(&self, file_name: &str) -> Option<&OutputFile> {
        self.files.iter().find(|it| it.file_name == file_name)
    }
}

pub fn file_name(prefix: &str, name: &str, ext: &str) -> String {
    format!("{}{}{}", prefix, name, ext)
}

fn render_all<'a, T: Serialize + 'a>(
    files: &mut Vec<OutputFile>,
    named: impl Iterator<Item = (&'a str, &'a T)>,
    prefix: &str,
    ext: &str,
) -> Result<Vec<String>, serde_json::Error> {
    let mut file_names = Vec::new();
    for (name, contents) in named {
        let file_name = file_name(prefix, name, ext);
        files.push(OutputFile {
            file_name: file_name.clone(),
            contents: serde_json::to_string(&Container::new(contents))?,
        });
        file_names.push(file_name);
    }
    Ok(file_names)
}
