use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bone {
    pub name: String,
    pub array_index: usize,
    /// Index of the parent in the owning bone set, `-1` for roots.
    pub parent_index: i32,
    // Collision shapes are never produced, the runtime still expects the key.
    pub collider_infos: Vec<serde_json::Value>,
}

/// Bones in render order.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct BoneSet {
    pub name: String,
    pub bones: Vec<Bone>,
}

impl BoneSet {
    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|it| it.name == name)
    }

    pub fn roots(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter().filter(|it| it.parent_index < 0)
    }
}
