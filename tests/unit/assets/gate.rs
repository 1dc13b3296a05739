use super::*;

struct FakeLoader {
    failing: Vec<&'static str>,
}

impl AssetLoader for FakeLoader {
    fn load(&self, path: &str) -> anyhow::Result<LoadedImage> {
        if self.failing.contains(&path) {
            anyhow::bail!("404");
        }
        Ok(LoadedImage {
            width: 4,
            height: 4,
        })
    }
}

fn declared() -> Vec<&'static str> {
    vec![
        "/assets/frame/frame-37.png",
        "/assets/frame/galery-01.jpg",
        "/assets/frame/background/cover-7.png",
    ]
}

#[test]
fn normalize_drops_site_root_and_rejects_parent_segments() {
    assert_eq!(
        normalize_asset_path("/assets/./frame//a.png").unwrap(),
        "assets/frame/a.png"
    );
    assert_eq!(normalize_asset_path("a\\b.png").unwrap(), "a/b.png");
    assert!(normalize_asset_path("../secret.png").is_err());
    assert!(normalize_asset_path("/").is_err());
    assert!(normalize_asset_path("  ").is_err());
}

#[test]
fn ready_only_after_every_image_loads() {
    let mut gate = AssetGate::new(declared()).unwrap();
    assert_eq!(gate.state(), &GateState::Loading { pending: 3 });

    gate.on_loaded("/assets/frame/frame-37.png").unwrap();
    gate.on_loaded("assets/frame/galery-01.jpg").unwrap();
    assert_eq!(gate.state(), &GateState::Loading { pending: 1 });

    gate.on_loaded("/assets/frame/background/cover-7.png").unwrap();
    assert_eq!(gate.state(), &GateState::Ready);
}

#[test]
fn one_failure_wins_even_if_the_rest_succeed() {
    let mut gate = AssetGate::new(declared()).unwrap();
    gate.on_loaded("/assets/frame/frame-37.png").unwrap();
    gate.on_failed("/assets/frame/galery-01.jpg", "404").unwrap();
    gate.on_loaded("/assets/frame/galery-01.jpg").unwrap();
    gate.on_loaded("/assets/frame/background/cover-7.png").unwrap();

    assert_eq!(
        gate.state(),
        &GateState::Failed(AssetLoadFailure {
            path: "assets/frame/galery-01.jpg".to_string(),
            reason: "404".to_string(),
        })
    );
}

#[test]
fn undeclared_paths_are_rejected() {
    let mut gate = AssetGate::new(declared()).unwrap();
    assert!(gate.on_loaded("/assets/unknown.png").is_err());
    assert_eq!(gate.state(), &GateState::Loading { pending: 3 });
}

#[test]
fn abandoned_gate_ignores_late_results() {
    let mut gate = AssetGate::new(declared()).unwrap();
    gate.abandon();
    for path in declared() {
        gate.on_loaded(path).unwrap();
    }
    assert_eq!(gate.state(), &GateState::Abandoned);
}

#[test]
fn empty_list_is_ready_and_duplicates_collapse() {
    let gate = AssetGate::new(Vec::<String>::new()).unwrap();
    assert_eq!(gate.state(), &GateState::Ready);

    let gate = AssetGate::new(["/a.png", "a.png", "b.png"]).unwrap();
    assert_eq!(gate.declared(), &["a.png".to_string(), "b.png".to_string()]);
}

#[test]
fn preload_with_stops_at_first_failure() {
    let mut gate = AssetGate::new(declared()).unwrap();
    let loader = FakeLoader {
        failing: vec!["assets/frame/galery-01.jpg"],
    };
    let state = gate.preload_with(&loader).clone();
    match state {
        GateState::Failed(failure) => {
            assert_eq!(failure.path, "assets/frame/galery-01.jpg");
            assert!(failure.reason.contains("404"));
        }
        other => panic!("expected failure, got {other:?}"),
    }

    let mut gate = AssetGate::new(declared()).unwrap();
    let state = gate.preload_with(&FakeLoader { failing: vec![] });
    assert_eq!(state, &GateState::Ready);
}

#[test]
fn fs_loader_reads_real_images_and_reports_missing_ones() {
    let root = PathBuf::from("target").join("unit_fs_image_loader");
    std::fs::create_dir_all(root.join("assets")).unwrap();
    image::save_buffer_with_format(
        root.join("assets/ok.png"),
        &[255u8; 2 * 3 * 4],
        2,
        3,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .unwrap();

    let loader = FsImageLoader::new(&root);
    assert_eq!(
        loader.load("assets/ok.png").unwrap(),
        LoadedImage {
            width: 2,
            height: 3,
        }
    );
    assert!(loader.load("assets/missing.png").is_err());

    let mut gate = AssetGate::new(["/assets/ok.png", "/assets/missing.png"]).unwrap();
    assert!(matches!(gate.preload_with(&loader), GateState::Failed(_)));
}

#[test]
fn failure_converts_to_asset_load_error() {
    let err: InvitationError = AssetLoadFailure {
        path: "a.png".to_string(),
        reason: "404".to_string(),
    }
    .into();
    assert!(err.to_string().starts_with("asset load error:"));
}
