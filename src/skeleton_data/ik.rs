use serde::Deserialize;

// Only parsed to detect rigs that rely on IK, which are not converted.
#[derive(Clone, Deserialize, Debug)]
pub struct IkInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bone: String,
    #[serde(default)]
    pub target: String
}
