use indexmap::IndexMap;
use serde::Serialize;

/// Attribute a curve drives.
#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    #[serde(rename = "tx")]
    Tx,
    #[serde(rename = "ty")]
    Ty,
    #[serde(rename = "rz")]
    Rz,
    #[serde(rename = "sx")]
    Sx,
    #[serde(rename = "sy")]
    Sy,
    #[serde(rename = "cv")]
    Cv,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(rename = "userData")]
    UserData,
}

#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IpType {
    Linear,
    Bezier,
}

/// Bezier control points. The first point is relative to the key frame,
/// the second one to the next key frame.
#[derive(Copy, Clone, Serialize, Debug, PartialEq)]
pub struct IpCurve {
    pub values: [f32; 4],
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyFrame<T> {
    pub time: u32,
    pub value: T,
    // Absent means the value is held until the next key frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_type: Option<IpType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_curve: Option<IpCurve>,
}

impl<T> KeyFrame<T> {
    pub fn held(time: u32, value: T) -> Self {
        Self {
            time,
            value,
            ip_type: None,
            ip_curve: None,
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Curve<T> {
    pub attribute: Attribute,
    pub key_frames: Vec<KeyFrame<T>>,
}

impl<T> Curve<T> {
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            key_frames: Vec::new(),
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellValue {
    pub skin_name: String,
    pub cell_name: String,
}

#[derive(Clone, Serialize, Default, Debug, PartialEq, Eq)]
pub struct UserDataValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl UserDataValue {
    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.action.is_none() && self.sound.is_none()
    }
}

/// Curves of every value type share one list in a curve tie; the attribute
/// tag tells them apart on the wire.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum AnyCurve {
    Number(Curve<f32>),
    // `None` hides the bone.
    Cell(Curve<Option<CellValue>>),
    UserData(Curve<UserDataValue>),
}

impl AnyCurve {
    pub fn attribute(&self) -> Attribute {
        match self {
            AnyCurve::Number(c) => c.attribute,
            AnyCurve::Cell(c) => c.attribute,
            AnyCurve::UserData(c) => c.attribute,
        }
    }

    pub fn key_times(&self) -> Vec<u32> {
        match self {
            AnyCurve::Number(c) => c.key_frames.iter().map(|it| it.time).collect(),
            AnyCurve::Cell(c) => c.key_frames.iter().map(|it| it.time).collect(),
            AnyCurve::UserData(c) => c.key_frames.iter().map(|it| it.time).collect(),
        }
    }

    pub fn as_number(&self) -> Option<&Curve<f32>> {
        match self {
            AnyCurve::Number(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_cell(&self) -> Option<&Curve<Option<CellValue>>> {
        match self {
            AnyCurve::Cell(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_user_data(&self) -> Option<&Curve<UserDataValue>> {
        match self {
            AnyCurve::UserData(c) => Some(c),
            _ => None,
        }
    }
}

/// All curves of one bone.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurveTie {
    pub bone_name: String,
    pub curves: Vec<AnyCurve>,
}

impl CurveTie {
    pub fn new(bone_name: &str) -> Self {
        Self {
            bone_name: bone_name.to_string(),
            curves: Vec::new(),
        }
    }

    pub fn curve(&self, attribute: Attribute) -> Option<&AnyCurve> {
        self.curves.iter().find(|it| it.attribute() == attribute)
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub name: String,
    pub fps: u32,
    pub frame_count: u32,
    pub curve_ties: IndexMap<String, CurveTie>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn held_key_frame_omits_interpolation() {
        let key = KeyFrame::held(3, 1.5f32);
        assert_eq!(
            serde_json::to_value(&key).unwrap(),
            json!({"time": 3, "value": 1.5})
        );
    }

    #[test]
    fn curves_serialize_without_variant_tags() {
        let mut curve = Curve::new(Attribute::Cv);
        curve.key_frames.push(KeyFrame::held(0, None));
        curve.key_frames.push(KeyFrame::held(
            2,
            Some(CellValue {
                skin_name: "head".into(),
                cell_name: "neck_head".into(),
            }),
        ));
        assert_eq!(
            serde_json::to_value(&AnyCurve::Cell(curve)).unwrap(),
            json!({
                "attribute": "cv",
                "keyFrames": [
                    {"time": 0, "value": null},
                    {"time": 2, "value": {"skinName": "head", "cellName": "neck_head"}}
                ]
            })
        );
    }

    #[test]
    fn bezier_key_frame_carries_its_curve() {
        let key = KeyFrame {
            time: 0,
            value: 0.5f32,
            ip_type: Some(IpType::Bezier),
            ip_curve: Some(IpCurve { values: [1.0, 0.5, -1.0, -0.5] }),
        };
        assert_eq!(
            serde_json::to_value(&key).unwrap(),
            json!({
                "time": 0,
                "value": 0.5,
                "ipType": "bezier",
                "ipCurve": {"values": [1.0, 0.5, -1.0, -0.5]}
            })
        );
    }
}
