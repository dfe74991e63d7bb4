//! Filesystem side of the converter: reading the project, finding its
//! textures and writing the result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;
use tracing::{debug, info};

use crate::convert::{ConvertInput, TextureInfo};
use crate::options::{Options, OptionsError};
use crate::output::ProjectFiles;
use crate::skeleton_data::RawSkeletonData;

/// Textures are looked up in this directory next to the project file.
pub const TEXTURE_DIR: &str = "texture";

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to scan textures in {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read the size of image {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to load {}", path.display())]
    Options {
        path: PathBuf,
        #[source]
        source: OptionsError,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn read_document(path: &Path) -> Result<RawSkeletonData, IoError> {
    let raw_bytes = fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RawSkeletonData::parse(&raw_bytes).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_options(path: &Path) -> Result<Options, IoError> {
    let raw_bytes = fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Options::from_ron(&raw_bytes).map_err(|source| IoError::Options {
        path: path.to_path_buf(),
        source,
    })
}

/// Images under `<project_dir>/texture`, sorted by path. A project without
/// that directory has no textures. Files that are not images are ignored.
pub fn discover_textures(project_dir: &Path) -> Result<Vec<TextureInfo>, IoError> {
    let texture_dir = project_dir.join(TEXTURE_DIR);
    let mut image_paths = Vec::new();
    visit_files(&texture_dir, &mut |path| {
        if ImageFormat::from_path(&path).is_ok() {
            image_paths.push(path);
        } else {
            debug!("not an image, ignored: {:?}", path);
        }
    })
    .map_err(|source| IoError::Scan {
        path: texture_dir.clone(),
        source,
    })?;
    image_paths.sort();

    image_paths
        .into_iter()
        .map(|path| {
            let (width, height) = image::image_dimensions(&path).map_err(|source| IoError::Image {
                path: path.clone(),
                source,
            })?;
            Ok(TextureInfo {
                file_name: relative_name(project_dir, &path),
                width,
                height,
            })
        })
        .collect()
}

fn visit_files(dir: &Path, cb: &mut dyn FnMut(PathBuf)) -> io::Result<()> {
    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                visit_files(&path, cb)?;
            } else {
                cb(path);
            }
        }
    }
    Ok(())
}

fn relative_name(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|it| it.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Project name of a project file: its file name without `.json`.
pub fn project_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|it| it.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(".json") {
        Some(name) => name.to_string(),
        None => file_name,
    }
}

pub fn load_input(path: &Path) -> Result<ConvertInput, IoError> {
    let document = read_document(path)?;
    let project_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let textures = discover_textures(project_dir)?;
    Ok(ConvertInput {
        name: project_name(path),
        document,
        textures,
    })
}

pub fn write_files(out_dir: &Path, files: &ProjectFiles) -> Result<(), IoError> {
    fs::create_dir_all(out_dir).map_err(|source| IoError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    for file in files.files.iter() {
        let path = out_dir.join(&file.file_name);
        fs::write(&path, &file.contents).map_err(|source| IoError::Write {
            path: path.clone(),
            source,
        })?;
        info!("write {}", path.display());
    }
    Ok(())
}
