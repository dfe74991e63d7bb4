use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct RawArmatureData {
    #[serde(rename = "frameRate")]
    #[serde(default)]
    pub frame_rate: Option<u32>,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "bone")]
    #[serde(default)]
    pub bones: Vec<super::bone::RawBone>,

    #[serde(default)]
    pub ik: Vec<super::ik::IkInfo>,

    #[serde(rename = "slot")]
    #[serde(default)]
    pub slots: Vec<super::slot::RawSlot>,

    #[serde(rename = "skin")]
    #[serde(default)]
    pub skins: Vec<super::skin::RawSkinData>,

    #[serde(rename = "animation")]
    #[serde(default)]
    pub animations: Vec<super::animation::RawAnimationData>,
}

impl RawArmatureData {
    pub fn has_ik(&self) -> bool {
        !self.ik.is_empty()
    }

    pub fn bone(&self, bone_name: &str) -> Option<&super::bone::RawBone> {
        self.bones.iter().find(|it| it.name == bone_name)
    }

    // Only one skin per armature can be authored, later ones are ignored.
    pub fn primary_skin(&self) -> Option<&super::skin::RawSkinData> {
        self.skins.first()
    }
}
