//! akashic-animation asset types, serialized with the field names the
//! akashic-animation runtime reads.

pub mod animation;
pub mod bone_set;
pub mod skin;

pub use animation::*;
pub use bone_set::*;
pub use skin::*;

use serde::Serialize;

/// Format version written into every file envelope.
pub const FILEFORMAT_VERSION: &str = "2.0.0";

/// The `{version, contents}` envelope every asset file is wrapped in.
#[derive(Clone, Serialize, Debug)]
pub struct Container<'a, T: Serialize> {
    pub version: &'a str,
    pub contents: &'a T,
}

impl<'a, T: Serialize> Container<'a, T> {
    pub fn new(contents: &'a T) -> Self {
        Self {
            version: FILEFORMAT_VERSION,
            contents,
        }
    }
}
