pub mod asa;
pub mod convert;
pub mod diagnostics;
pub mod io;
pub mod options;
pub mod output;
pub mod shared_types;
pub mod skeleton_data;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::asa::{Animation, AnyCurve, Attribute, IpType};
    use crate::convert::error::ConvertError;
    use crate::convert::{ConvertInput, Converter, TextureInfo};
    use crate::diagnostics::{CollectedDiagnostics, Diagnostic};
    use crate::options::{Options, Prefixes};
    use crate::output::ProjectFiles;
    use crate::skeleton_data::RawSkeletonData;

    fn texture(file_name: &str, width: u32, height: u32) -> TextureInfo {
        TextureInfo {
            file_name: file_name.into(),
            width,
            height,
        }
    }

    fn stickman() -> ConvertInput {
        ConvertInput {
            name: "stickman".into(),
            document: RawSkeletonData::parse(include_bytes!("test_assets/stickman_ske.json")).unwrap(),
            textures: vec![
                texture("texture/body.png", 20, 40),
                texture("texture/face/head.png", 64, 64),
                texture("texture/limb.png", 32, 16),
            ],
        }
    }

    fn dancer() -> ConvertInput {
        ConvertInput {
            name: "dancer".into(),
            document: RawSkeletonData::parse(include_bytes!("test_assets/dancer_ske.json")).unwrap(),
            textures: vec![
                texture("texture/fist.png", 16, 16),
                texture("texture/hand.png", 16, 16),
                texture("texture/torso.png", 40, 60),
            ],
        }
    }

    fn animation<'a>(animations: &'a [Animation], name: &str) -> &'a Animation {
        animations.iter().find(|it| it.name == name).unwrap()
    }

    fn number_curve<'a>(animation: &'a Animation, bone: &str, attribute: Attribute) -> &'a crate::asa::Curve<f32> {
        animation.curve_ties[bone].curve(attribute).unwrap().as_number().unwrap()
    }

    fn assert_well_formed(animation: &Animation) {
        for tie in animation.curve_ties.values() {
            for curve in tie.curves.iter() {
                let times = curve.key_times();
                if let AnyCurve::UserData(_) = curve {
                    assert!(times.windows(2).all(|it| it[0] < it[1]));
                    continue;
                }
                assert_eq!(times.first(), Some(&0), "{} {:?}", tie.bone_name, curve.attribute());
                assert!(times.windows(2).all(|it| it[0] <= it[1]));
                assert!(times.iter().all(|it| *it <= animation.frame_count));
            }
        }
    }

    #[test]
    fn test_conversion_of_dense_project() {
        let collected = CollectedDiagnostics::new();
        let converter = Converter::with_diagnostics(Options::default(), &collected);
        let project = converter.convert(&stickman()).unwrap();

        let bone_set_names: Vec<&str> = project.bone_sets.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(bone_set_names, vec!["Stickman"]);
        let bone_set = &project.bone_sets[0];
        let bone_names: Vec<&str> = bone_set.bones.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(
            bone_names,
            vec!["arm_l", "root", "body", "neck", "leg_r", "leg_l", "arm_r", "head"]
        );
        let parents: Vec<i32> = bone_set.bones.iter().map(|it| it.parent_index).collect();
        assert_eq!(parents, vec![2, -1, 1, 2, 1, 1, 2, 3]);

        let walk = animation(&project.animations, "walk");
        assert_eq!(walk.fps, 24);
        assert_eq!(walk.frame_count, 12);
        let tie_names: Vec<&String> = walk.curve_ties.keys().collect();
        assert_eq!(tie_names, vec!["arm_l", "body", "leg_l", "arm_r", "head"]);
        assert_well_formed(walk);

        let rz = number_curve(walk, "arm_l", Attribute::Rz);
        let values: Vec<f32> = rz.key_frames.iter().map(|it| it.value).collect();
        assert_eq!(values, vec![150.0, 90.0, 150.0]);
        assert_eq!(rz.key_frames[1].ip_type, Some(IpType::Bezier));
        let ip_curve = rz.key_frames[1].ip_curve.unwrap().values;
        assert_relative_eq!(ip_curve[0], 1.5);
        assert_relative_eq!(ip_curve[1], 0.0);
        assert_relative_eq!(ip_curve[2], -1.5);
        assert_relative_eq!(ip_curve[3], 0.0);

        let body_ty = number_curve(walk, "body", Attribute::Ty);
        let values: Vec<f32> = body_ty.key_frames.iter().map(|it| it.value).collect();
        assert_eq!(values, vec![-38.0, -42.0, -40.0]);
        assert_eq!(body_ty.key_frames[0].ip_type, Some(IpType::Linear));
        assert_eq!(body_ty.key_frames[1].ip_type, None);
        assert_relative_eq!(number_curve(walk, "body", Attribute::Sy).key_frames[1].value, 0.9);

        let head_cv = walk.curve_ties["head"].curve(Attribute::Cv).unwrap().as_cell().unwrap();
        let cells: Vec<(String, String)> = head_cv
            .key_frames
            .iter()
            .map(|it| it.value.clone().unwrap())
            .map(|it| (it.skin_name, it.cell_name))
            .collect();
        assert_eq!(
            cells,
            vec![
                ("head".to_string(), "head_head".to_string()),
                ("head_back".to_string(), "head_head_back".to_string())
            ]
        );
        let head_alpha = number_curve(walk, "head", Attribute::Alpha);
        assert_eq!(head_alpha.key_frames[1].value, 0.5);

        let leg_cv = walk.curve_ties["leg_l"].curve(Attribute::Cv).unwrap().as_cell().unwrap();
        assert_eq!(leg_cv.key_frames[0].value.as_ref().unwrap().cell_name, "leg_l_limb");
        assert_eq!(leg_cv.key_frames[2].value, None);
        assert_eq!(walk.curve_ties["leg_l"].curves.len(), 2);

        let diagnostics = collected.take();
        assert!(diagnostics.contains(&Diagnostic::IkSkipped { armature: "Rig".into() }));
        assert!(diagnostics.contains(&Diagnostic::UnsupportedEasing {
            armature: "Stickman".into(),
            animation: "walk".into(),
            bone: "body".into(),
            easing: 2.0,
        }));
    }

    #[test]
    fn test_untouched_slots_get_a_single_key() {
        let project = Converter::new(Options::default()).convert(&stickman()).unwrap();
        let stand = animation(&project.animations, "stand");
        assert_eq!(stand.frame_count, 1);
        assert_well_formed(stand);
        for tie in stand.curve_ties.values() {
            let attributes: Vec<Attribute> = tie.curves.iter().map(|it| it.attribute()).collect();
            assert_eq!(attributes, vec![Attribute::Cv, Attribute::Alpha]);
            for curve in tie.curves.iter() {
                assert_eq!(curve.key_times(), vec![0]);
            }
        }
        let leg_cv = stand.curve_ties["leg_l"].curve(Attribute::Cv).unwrap().as_cell().unwrap();
        assert_eq!(leg_cv.key_frames[0].value, None);
    }

    #[test]
    fn test_cells_of_dense_project() {
        let project = Converter::new(Options::default()).convert(&stickman()).unwrap();
        let skin_names: Vec<&str> = project.skins.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(skin_names, vec!["body", "head", "limb"]);

        let head = &project.skins[1];
        let cell_names: Vec<&String> = head.cells.keys().collect();
        assert_eq!(cell_names, vec!["head_head"]);
        assert_relative_eq!(head.cells["head_head"].pivot.y, 0.25);

        let limb = &project.skins[2];
        let cell_names: Vec<&String> = limb.cells.keys().collect();
        assert_eq!(cell_names, vec!["arm_l_limb", "arm_r_limb", "leg_l_limb"]);
        assert_relative_eq!(limb.cells["arm_l_limb"].pivot.x, -0.375);
        assert_relative_eq!(limb.cells["arm_l_limb"].rz, -90.0);
    }

    #[test]
    fn test_conversion_of_sparse_project() {
        let options = Options {
            output_user_data: true,
            ..Options::default()
        };
        let project = Converter::new(options).convert(&dancer()).unwrap();
        let spin = animation(&project.animations, "spin");
        assert_eq!(spin.fps, 30);
        assert_eq!(spin.frame_count, 10);
        assert_well_formed(spin);

        let tie_names: Vec<&String> = spin.curve_ties.keys().collect();
        assert_eq!(tie_names, vec!["root", "hip", "hand", "chest"]);

        // Untouched bones hold their setup pose.
        let hip_ty = number_curve(spin, "hip", Attribute::Ty);
        assert_eq!(hip_ty.key_frames.len(), 1);
        assert_eq!(hip_ty.key_frames[0].value, -50.0);

        // Rotation set only on the first key carries over.
        let chest_rz = number_curve(spin, "chest", Attribute::Rz);
        assert_eq!(chest_rz.key_frames.len(), 4);
        assert_relative_eq!(chest_rz.key_frames[0].value, -89.8, epsilon = 1e-4);
        assert_relative_eq!(chest_rz.key_frames[1].value, -89.8, epsilon = 1e-4);
        assert_relative_eq!(chest_rz.key_frames[3].value, -45.0);
        assert_eq!(chest_rz.key_frames[1].ip_type, Some(IpType::Bezier));

        let user_data = spin.curve_ties["chest"]
            .curve(Attribute::UserData)
            .unwrap()
            .as_user_data()
            .unwrap();
        assert_eq!(user_data.key_frames.len(), 1);
        assert_eq!(user_data.key_frames[0].time, 6);
        assert_eq!(user_data.key_frames[0].value.event.as_deref(), Some("clap"));

        let hand_sx = number_curve(spin, "hand", Attribute::Sx);
        let values: Vec<f32> = hand_sx.key_frames.iter().map(|it| it.value).collect();
        assert_eq!(values, vec![3.0, 3.0]);
        let hand_sy = number_curve(spin, "hand", Attribute::Sy);
        assert_eq!(hand_sy.key_frames[1].value, 0.5);
        assert_eq!(hand_sy.key_frames[1].ip_type, None);

        let hand_cv = spin.curve_ties["hand"].curve(Attribute::Cv).unwrap().as_cell().unwrap();
        let cells: Vec<(u32, String)> = hand_cv
            .key_frames
            .iter()
            .map(|it| (it.time, it.value.clone().unwrap().cell_name))
            .collect();
        assert_eq!(
            cells,
            vec![
                (0, "hand_hand".to_string()),
                (3, "hand_hand".to_string()),
                (5, "hand_fist".to_string())
            ]
        );
        let hand_alpha = number_curve(spin, "hand", Attribute::Alpha);
        assert!(hand_alpha.key_frames.iter().all(|it| (it.value - 0.4).abs() < 1e-6));
    }

    #[test]
    fn test_conversion_of_breathing_project() {
        let input = ConvertInput {
            name: "breathing".into(),
            document: RawSkeletonData::parse(include_bytes!("test_assets/breathing_ske.json")).unwrap(),
            textures: vec![texture("texture/head.png", 48, 48)],
        };
        let collected = CollectedDiagnostics::new();
        let project = Converter::with_diagnostics(Options::default(), &collected)
            .convert(&input)
            .unwrap();

        assert_eq!(project.bone_sets.len(), 1);
        let bone_set = &project.bone_sets[0];
        assert_eq!(bone_set.name, "Armature");
        assert_eq!(bone_set.bones.len(), 12);
        assert_eq!(bone_set.bones.last().unwrap().name, "head");

        assert_eq!(project.skins.len(), 1);
        let cell_names: Vec<&String> = project.skins[0].cells.keys().collect();
        assert_eq!(cell_names, vec!["face_head", "face_shadow_head"]);

        assert_eq!(project.animations.len(), 1);
        let idle = &project.animations[0];
        assert_eq!(idle.fps, 30);
        assert_eq!(idle.frame_count, 6);
        for bone in bone_set.bones.iter() {
            assert!(idle.curve_ties.contains_key(&bone.name), "{}", bone.name);
        }
        assert_well_formed(idle);

        let head_rz = number_curve(idle, "head", Attribute::Rz);
        assert_eq!(head_rz.key_frames.len(), 6);
        assert!(head_rz.key_frames.iter().all(|it| it.ip_type == Some(IpType::Linear)));
        assert_eq!(idle.curve_ties["shadow"].curves.len(), 7);

        assert_eq!(
            collected.take(),
            vec![Diagnostic::ArmatureConverted {
                armature: "Armature".into(),
                animations: 1
            }]
        );
    }

    #[test]
    fn test_conversion_of_empty_project() {
        let input = ConvertInput {
            name: "empty".into(),
            document: RawSkeletonData::parse(include_bytes!("test_assets/empty_ske.json")).unwrap(),
            textures: Vec::new(),
        };
        let project = Converter::new(Options::default()).convert(&input).unwrap();
        assert!(project.animations.is_empty());
        assert!(project.skins.is_empty());
        assert_eq!(project.bone_sets.len(), 1);
        assert!(project.bone_sets[0].bones.is_empty());

        let files = ProjectFiles::build(&project, &Prefixes::default(), false).unwrap();
        let names: Vec<&str> = files.files.iter().map(|it| it.file_name.as_str()).collect();
        assert_eq!(names, vec!["Nothing.asabn", "empty.asapj"]);
    }

    #[test]
    fn test_display_index_out_of_range_fails_the_conversion() {
        let mut document: serde_json::Value =
            serde_json::from_slice(include_bytes!("test_assets/stickman_ske.json")).unwrap();
        document["armature"][0]["animation"][0]["slot"][0]["frame"][1]["displayIndex"] = serde_json::json!(5);
        let input = ConvertInput {
            document: serde_json::from_value(document).unwrap(),
            ..stickman()
        };
        let err = Converter::new(Options::default()).convert(&input).unwrap_err();
        assert_eq!(
            err,
            ConvertError::DisplayOutOfRange {
                armature: "Stickman".into(),
                bone: "head".into(),
                index: 5
            }
        );
    }

    #[test]
    fn test_written_project_files() {
        let options = Options {
            output_combo_info: true,
            output_related_file_info: true,
            asaan_long_name: true,
            prefixes: Prefixes::standard(),
            ..Options::default()
        };
        let converter = Converter::new(options);
        let project = converter.convert(&stickman()).unwrap();
        let files = ProjectFiles::build(&project, &converter.options().prefixes, true).unwrap();

        let names: Vec<&str> = files.files.iter().map(|it| it.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "bn_Stickman.asabn",
                "sk_body.asask",
                "sk_head.asask",
                "sk_limb.asask",
                "an_Stickman_walk.asaan",
                "an_Stickman_stand.asaan",
                "pj_stickman.asapj",
            ]
        );

        let manifest: serde_json::Value = serde_json::from_str(&files.file("pj_stickman.asapj").unwrap().contents).unwrap();
        assert_eq!(manifest["version"], "2.0.0");
        let user_data = &manifest["contents"]["userData"];
        assert_eq!(
            user_data["combinationInfo"],
            serde_json::json!([{
                "boneName": "Stickman",
                "animationNames": ["Stickman_walk", "Stickman_stand"],
                "skinNames": ["body", "head", "limb"]
            }])
        );
        assert_eq!(
            user_data["relatedFileInfo"]["imageFileNames"],
            serde_json::json!(["texture/body.png", "texture/face/head.png", "texture/limb.png"])
        );

        let walk: serde_json::Value =
            serde_json::from_str(&files.file("an_Stickman_walk.asaan").unwrap().contents).unwrap();
        let leg_cv = &walk["contents"]["curveTies"]["leg_l"]["curves"][0];
        assert_eq!(leg_cv["attribute"], "cv");
        assert_eq!(leg_cv["keyFrames"][2], serde_json::json!({"time": 8, "value": null}));
    }
}
