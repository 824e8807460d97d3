use std::path::{Path, PathBuf};

use vision_arena_assets::AssetTable;
use vision_arena_core::{AssetSelector, BandColor, BasePlate};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn manifest_on_disk_resolves_every_selector() {
    let table =
        AssetTable::from_manifest_path(fixtures().join("manifest.toml")).expect("manifest loads");

    assert_eq!(table.len(), AssetSelector::ALL.len());
    assert_eq!(
        table.resolve(AssetSelector::Plate(BasePlate::Band(BandColor::Cyan))),
        Some(fixtures().join("plates/cyan.urdf").as_path())
    );
    assert_eq!(
        table.resolve(AssetSelector::Arrow),
        Some(fixtures().join("markers/arrow.urdf").as_path())
    );
}

#[test]
fn missing_manifest_reports_its_path() {
    let path = fixtures().join("absent.toml");
    let error = AssetTable::from_manifest_path(&path).expect_err("file does not exist");
    assert!(
        format!("{error:#}").contains("absent.toml"),
        "unexpected error: {error:#}"
    );
}
