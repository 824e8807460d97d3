#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Resolves asset selectors produced by the arena layout to on-disk resources.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use vision_arena_core::{AssetSelector, BandColor, BasePlate, Shape, Tint};

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// Mapping from every asset selector to the resource that realises it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetTable {
    paths: HashMap<AssetSelector, PathBuf>,
}

impl AssetTable {
    /// Table pointing at the stock resource directory shipped with the arena.
    #[must_use]
    pub fn reference() -> Self {
        let paths = AssetSelector::ALL
            .into_iter()
            .map(|selector| (selector, reference_path(selector)))
            .collect();
        Self { paths }
    }

    /// Loads a table from the TOML manifest located at the provided path.
    ///
    /// Paths listed in the manifest are resolved relative to its directory.
    pub fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        let manifest_path = path.as_ref();
        let contents = fs::read_to_string(manifest_path).with_context(|| {
            format!(
                "failed to read asset manifest at {}",
                manifest_path.display()
            )
        })?;
        let base = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let entries = parse_manifest(&contents, &base)?;
        Ok(Self {
            paths: entries.into_iter().collect(),
        })
    }

    /// Resource registered for the provided selector.
    #[must_use]
    pub fn resolve(&self, selector: AssetSelector) -> Option<&Path> {
        self.paths.get(&selector).map(PathBuf::as_path)
    }

    /// Number of selectors stored in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Reports whether the table holds no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn reference_path(selector: AssetSelector) -> PathBuf {
    let root = Path::new("rsc");
    match selector {
        AssetSelector::Plate(plate) => {
            let color = match plate {
                BasePlate::White => "white",
                BasePlate::Black => "black",
                BasePlate::Band(BandColor::Green) => "green",
                BasePlate::Band(BandColor::Blue) => "blue",
                BasePlate::Band(BandColor::Cyan) => "cyan",
                BasePlate::Band(BandColor::Magenta) => "magenta",
            };
            root.join("base plate")
                .join(format!("base plate {color}.urdf"))
        }
        AssetSelector::Shape(glyph) => {
            let shape = match glyph.shape() {
                Shape::Square => "square",
                Shape::Circle => "circle",
                Shape::Triangle => "triangle",
            };
            let tint = match glyph.tint() {
                Tint::Yellow => "yellow",
                Tint::Red => "red",
            };
            root.join(shape).join(format!("{shape} {tint}.urdf"))
        }
        AssetSelector::Arrow => root.join("arrow").join("arrow.urdf"),
    }
}

#[derive(Debug, serde::Deserialize)]
struct Manifest {
    version: u32,
    assets: HashMap<String, String>,
}

fn parse_manifest(contents: &str, base_path: &Path) -> Result<Vec<(AssetSelector, PathBuf)>> {
    let manifest: Manifest =
        toml::from_str(contents).context("failed to parse asset manifest toml contents")?;

    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        bail!(
            "unsupported asset manifest version {}; expected {}",
            manifest.version,
            SUPPORTED_MANIFEST_VERSION
        );
    }

    let mut entries = manifest.assets;
    let mut ordered = Vec::with_capacity(AssetSelector::ALL.len());
    for selector in AssetSelector::ALL {
        let Some(relative_path) = entries.remove(selector.key()) else {
            bail!("asset manifest missing entry for `{selector}`");
        };
        ordered.push((selector, base_path.join(relative_path)));
    }

    if !entries.is_empty() {
        let mut unexpected: Vec<String> = entries.into_keys().collect();
        unexpected.sort();
        bail!(
            "asset manifest contains unexpected keys: {}",
            unexpected.join(", ")
        );
    }

    Ok(ordered)
}
