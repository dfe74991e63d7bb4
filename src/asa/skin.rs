use indexmap::IndexMap;
use serde::Serialize;

#[derive(Copy, Clone, Serialize, Default, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Copy, Clone, Serialize, Default, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A named region of a skin's image.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Cell {
    pub name: String,
    pub pos: Point,
    pub size: Size,
    pub pivot: Point,
    pub rz: f32,
}

/// One texture image and the cells cut from it.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub name: String,
    pub image_asset_name: String,
    #[serde(rename = "imageSizeW")]
    pub image_size_w: u32,
    #[serde(rename = "imageSizeH")]
    pub image_size_h: u32,
    pub cells: IndexMap<String, Cell>,
}

impl Skin {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            image_asset_name: name.to_string(),
            image_size_w: width,
            image_size_h: height,
            cells: IndexMap::new(),
        }
    }

    /// Inserts `cell`, replacing any cell of the same name.
    pub fn insert_cell(&mut self, cell: Cell) {
        self.cells.insert(cell.name.clone(), cell);
    }
}
