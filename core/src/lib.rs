#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Vision Arena layout generator.
//!
//! This crate defines the vocabulary that connects the pure systems, the
//! authoritative world and the adapters. Adapters submit [`Command`] values
//! describing how the arena should be regenerated, the world executes them via
//! its `apply` entry point and broadcasts [`Event`] values describing the
//! freshly generated layout. Every cell of a layout is described by a
//! [`Tile`], which is the explicit tag that accompanies the compact
//! [`EncodedValue`] handed to downstream consumers.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length used when no explicit grid size is configured.
pub const DEFAULT_GRID_SIDE: u32 = 9;

/// Smallest side length that still fits every structured band.
pub const MIN_GRID_SIDE: u32 = 5;

/// Commands that express all permissible arena mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Regenerates the arena with a new grid size, keeping the current seed.
    ConfigureArena {
        /// Validated side length of the square grid.
        size: GridSize,
    },
    /// Discards the current layout and regenerates it from the provided seed.
    ResetArena {
        /// Seed fed to the deterministic random source.
        seed: u64,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a complete layout replaced the previous one.
    ArenaGenerated {
        /// Side length of the generated grid.
        size: GridSize,
        /// Seed that produced the layout.
        seed: u64,
        /// Colours assigned to the four cross arms.
        palette: Palette,
    },
}

/// Errors raised while validating arena configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The requested grid size cannot host a symmetric arena.
    #[error("invalid arena configuration: grid side {side} {issue}")]
    InvalidConfiguration {
        /// Side length that was rejected.
        side: u32,
        /// Specific constraint the side length violated.
        issue: SizeIssue,
    },
    /// A palette listed the same colour for more than one arm.
    #[error("palette assigns {color:?} to more than one arm")]
    DuplicatePaletteColor {
        /// Colour that appeared more than once.
        color: BandColor,
    },
}

/// Constraint violated by a rejected grid side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeIssue {
    /// The grid has no single centre cell.
    Even,
    /// The grid cannot fit the structured bands around its centre.
    TooSmall,
}

impl fmt::Display for SizeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "must be odd"),
            Self::TooSmall => write!(f, "must be at least {MIN_GRID_SIDE}"),
        }
    }
}

/// Errors raised when an encoded value disagrees with its tile tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The value lies outside the range reserved for the tagged tile kind.
    #[error("encoded value {value} is not a valid {kind:?} tile")]
    OutOfRange {
        /// Integer that failed to decode.
        value: i32,
        /// Tag supplied alongside the integer.
        kind: TileKind,
    },
}

/// Validated side length of the square arena grid.
///
/// Only odd values of at least [`MIN_GRID_SIDE`] are representable, so every
/// grid has an exact centre cell and room for the four structured bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSize(u32);

impl GridSize {
    /// Validates the provided side length.
    pub const fn new(side: u32) -> Result<Self, LayoutError> {
        if side < MIN_GRID_SIDE {
            return Err(LayoutError::InvalidConfiguration {
                side,
                issue: SizeIssue::TooSmall,
            });
        }
        if side % 2 == 0 {
            return Err(LayoutError::InvalidConfiguration {
                side,
                issue: SizeIssue::Even,
            });
        }
        Ok(Self(side))
    }

    /// Number of rows (and columns) in the grid.
    #[must_use]
    pub const fn side(self) -> u32 {
        self.0
    }

    /// Index of the middle row and column.
    #[must_use]
    pub const fn center(self) -> u32 {
        self.0 / 2
    }

    /// Index of the last row and column.
    #[must_use]
    pub const fn last(self) -> u32 {
        self.0 - 1
    }

    /// Coordinate of the exact centre cell.
    #[must_use]
    pub const fn center_cell(self) -> CellCoord {
        CellCoord::new(self.center(), self.center())
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 as usize * self.0 as usize
    }

    /// Reports whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(self, cell: CellCoord) -> bool {
        cell.row() < self.0 && cell.column() < self.0
    }

    /// Row-major index of the cell within flat storage.
    #[must_use]
    pub fn index(self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.0).ok()?;
        Some(row * width + column)
    }

    /// Iterates every coordinate in row-major order.
    pub fn cells(self) -> impl Iterator<Item = CellCoord> {
        let side = self.0;
        (0..side).flat_map(move |row| (0..side).map(move |column| CellCoord::new(row, column)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIDE)
    }
}

impl TryFrom<u32> for GridSize {
    type Error = LayoutError;

    fn try_from(side: u32) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> Self {
        size.side()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Location of a single grid cell expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// One of the four arms of the cross that passes through the grid centre.
///
/// Declaration order matches the order in which palette colours are handed
/// out: the horizontal arm first (west then east), then the vertical arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Arm {
    /// Centre row, columns left of the centre.
    West,
    /// Centre row, columns right of the centre.
    East,
    /// Centre column, rows above the centre.
    North,
    /// Centre column, rows below the centre.
    South,
}

impl Arm {
    /// Every arm in palette order.
    pub const ALL: [Arm; 4] = [Arm::West, Arm::East, Arm::North, Arm::South];

    /// Position of the arm within the palette.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::West => 0,
            Self::East => 1,
            Self::North => 2,
            Self::South => 3,
        }
    }

    /// Border cell at the outer end of the arm.
    #[must_use]
    pub const fn endpoint(self, grid: GridSize) -> CellCoord {
        let center = grid.center();
        match self {
            Self::West => CellCoord::new(center, 0),
            Self::East => CellCoord::new(center, grid.last()),
            Self::North => CellCoord::new(0, center),
            Self::South => CellCoord::new(grid.last(), center),
        }
    }

    /// Reports whether the cell is the border end of this arm.
    #[must_use]
    pub fn is_endpoint(self, grid: GridSize, cell: CellCoord) -> bool {
        self.endpoint(grid) == cell
    }
}

/// One of the four colours shuffled across the cross arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BandColor {
    /// Band 0.
    Green,
    /// Band 1.
    Blue,
    /// Band 2.
    Cyan,
    /// Band 3.
    Magenta,
}

impl BandColor {
    /// Every colour in band order.
    pub const ALL: [BandColor; 4] = [
        BandColor::Green,
        BandColor::Blue,
        BandColor::Cyan,
        BandColor::Magenta,
    ];

    /// Numeric band index used by the encoding.
    #[must_use]
    pub const fn band(self) -> u8 {
        match self {
            Self::Green => 0,
            Self::Blue => 1,
            Self::Cyan => 2,
            Self::Magenta => 3,
        }
    }

    /// Resolves a numeric band index.
    #[must_use]
    pub const fn from_band(band: u8) -> Option<Self> {
        match band {
            0 => Some(Self::Green),
            1 => Some(Self::Blue),
            2 => Some(Self::Cyan),
            3 => Some(Self::Magenta),
            _ => None,
        }
    }
}

/// Assignment of band colours to the four cross arms, frozen per layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[BandColor; 4]", into = "[BandColor; 4]")]
pub struct Palette {
    colors: [BandColor; 4],
}

impl Palette {
    /// Palette that assigns colours in band order.
    pub const REFERENCE: Palette = Palette {
        colors: BandColor::ALL,
    };

    /// Builds a palette from colours listed in [`Arm::ALL`] order.
    ///
    /// Every colour must appear exactly once.
    pub fn new(colors: [BandColor; 4]) -> Result<Self, LayoutError> {
        for (index, color) in colors.iter().enumerate() {
            if colors[..index].contains(color) {
                return Err(LayoutError::DuplicatePaletteColor { color: *color });
            }
        }
        Ok(Self { colors })
    }

    /// Colour painted on the base plates of the provided arm.
    #[must_use]
    pub const fn color_for(&self, arm: Arm) -> BandColor {
        self.colors[arm.index()]
    }

    /// Colours in [`Arm::ALL`] order.
    #[must_use]
    pub const fn colors(&self) -> [BandColor; 4] {
        self.colors
    }
}

impl TryFrom<[BandColor; 4]> for Palette {
    type Error = LayoutError;

    fn try_from(colors: [BandColor; 4]) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for [BandColor; 4] {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// Geometric shape printed on a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Square marker.
    Square,
    /// Circular marker.
    Circle,
    /// Triangular marker; its asset origin is offset from the plate centre.
    Triangle,
}

/// Paint applied to a shape marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tint {
    /// Yellow markers use shape codes 0..=2.
    Yellow,
    /// Red markers use shape codes 3..=5.
    Red,
}

/// Shape and tint pair drawn for a cell, identified by a code in `0..6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeColor {
    shape: Shape,
    tint: Tint,
}

impl ShapeColor {
    /// Number of distinct shape codes.
    pub const COUNT: u8 = 6;

    /// Every shape code in ascending order.
    pub const ALL: [ShapeColor; 6] = [
        ShapeColor::new(Shape::Square, Tint::Yellow),
        ShapeColor::new(Shape::Circle, Tint::Yellow),
        ShapeColor::new(Shape::Triangle, Tint::Yellow),
        ShapeColor::new(Shape::Square, Tint::Red),
        ShapeColor::new(Shape::Circle, Tint::Red),
        ShapeColor::new(Shape::Triangle, Tint::Red),
    ];

    /// Pairs a shape with a tint.
    #[must_use]
    pub const fn new(shape: Shape, tint: Tint) -> Self {
        Self { shape, tint }
    }

    /// Resolves a shape code; the shape is `code % 3` and the tint `code / 3`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        let shape = match code % 3 {
            0 => Shape::Square,
            1 => Shape::Circle,
            _ => Shape::Triangle,
        };
        let tint = match code / 3 {
            0 => Tint::Yellow,
            1 => Tint::Red,
            _ => return None,
        };
        Some(Self { shape, tint })
    }

    /// Code of the pair in `0..6`.
    #[must_use]
    pub const fn code(&self) -> u8 {
        let shape = match self.shape {
            Shape::Square => 0,
            Shape::Circle => 1,
            Shape::Triangle => 2,
        };
        let tint = match self.tint {
            Tint::Yellow => 0,
            Tint::Red => 1,
        };
        tint * 3 + shape
    }

    /// Shape printed on the marker.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Paint applied to the marker.
    #[must_use]
    pub const fn tint(&self) -> Tint {
        self.tint
    }
}

/// Colour of the base plate laid under a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasePlate {
    /// Plates under ring and band shapes and under the centre.
    White,
    /// Plates under filler cells.
    Black,
    /// Plates along a cross arm.
    Band(BandColor),
}

/// Placement category derived purely from a cell's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// First and last rows, excluding the centre column.
    OuterRing,
    /// Border columns of the second and second-to-last rows.
    CornerBand,
    /// Third and third-to-last rows, with gaps next to the border and centre.
    MidRing,
    /// Fourth and fourth-to-last rows, even columns only.
    InnerBand,
    /// Row or column through the centre, excluding the centre itself.
    CrossArm(Arm),
    /// Exact centre of the grid.
    Center,
    /// Any cell outside the structured bands.
    Filler,
}

impl Category {
    /// Reports whether the category carries a white-based shape.
    #[must_use]
    pub const fn is_band(self) -> bool {
        matches!(
            self,
            Self::OuterRing | Self::CornerBand | Self::MidRing | Self::InnerBand
        )
    }

    /// Arm the category lies on, if any.
    #[must_use]
    pub const fn arm(self) -> Option<Arm> {
        match self {
            Self::CrossArm(arm) => Some(arm),
            _ => None,
        }
    }
}

/// Discriminant of a [`Tile`], carried alongside encoded values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Shape on a white plate.
    WhiteShape,
    /// Shape on a cross-arm plate.
    ColoredShape,
    /// Arrow on a cross-arm plate.
    Arrow,
    /// The centre tile.
    Center,
    /// A black filler plate.
    Filler,
}

/// Fully resolved content of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Shape drawn on a white plate.
    WhiteShape(ShapeColor),
    /// Shape drawn on a cross-arm plate.
    ColoredShape {
        /// Colour of the arm plate.
        color: BandColor,
        /// Shape printed on the plate.
        glyph: ShapeColor,
    },
    /// Arrow at the border end of a cross arm, pointing away from the centre.
    Arrow {
        /// Colour of the arm plate.
        color: BandColor,
        /// Arm the arrow terminates.
        arm: Arm,
    },
    /// White centre plate without a marker.
    Center,
    /// Black plate without a marker.
    Filler,
}

impl Tile {
    /// Discriminant used to decode the tile's encoded value.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        match self {
            Self::WhiteShape(_) => TileKind::WhiteShape,
            Self::ColoredShape { .. } => TileKind::ColoredShape,
            Self::Arrow { .. } => TileKind::Arrow,
            Self::Center => TileKind::Center,
            Self::Filler => TileKind::Filler,
        }
    }

    /// Base plate laid under the tile.
    #[must_use]
    pub const fn plate(&self) -> BasePlate {
        match self {
            Self::WhiteShape(_) | Self::Center => BasePlate::White,
            Self::ColoredShape { color, .. } | Self::Arrow { color, .. } => BasePlate::Band(*color),
            Self::Filler => BasePlate::Black,
        }
    }

    /// Shape printed on the tile, if any.
    #[must_use]
    pub const fn shape(&self) -> Option<ShapeColor> {
        match self {
            Self::WhiteShape(glyph) | Self::ColoredShape { glyph, .. } => Some(*glyph),
            Self::Arrow { .. } | Self::Center | Self::Filler => None,
        }
    }

    /// Reports whether the tile is an arrow marker.
    #[must_use]
    pub const fn is_arrow(&self) -> bool {
        matches!(self, Self::Arrow { .. })
    }

    /// Asset instantiated on top of the plate, if any.
    #[must_use]
    pub const fn marker_asset(&self) -> Option<AssetSelector> {
        match self {
            Self::WhiteShape(glyph) | Self::ColoredShape { glyph, .. } => {
                Some(AssetSelector::Shape(*glyph))
            }
            Self::Arrow { .. } => Some(AssetSelector::Arrow),
            Self::Center | Self::Filler => None,
        }
    }

    /// Compact integer describing the tile.
    #[must_use]
    pub const fn encode(&self) -> EncodedValue {
        let value = match self {
            Self::WhiteShape(glyph) => glyph.code() as i32 + 1,
            Self::ColoredShape { color, glyph } => {
                (color.band() as i32 + 1) * EncodedValue::SHAPES_PER_BAND + glyph.code() as i32 + 1
            }
            Self::Arrow { color, .. } => EncodedValue::ARROW_BASE + color.band() as i32,
            Self::Center => EncodedValue::CENTER.0,
            Self::Filler => EncodedValue::FILLER.0,
        };
        EncodedValue(value)
    }
}

/// Tile content recovered from an encoded value and its tag.
///
/// Arrows decode without their arm, which the integer does not carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodedTile {
    /// Shape on a white plate.
    WhiteShape(ShapeColor),
    /// Shape on a band plate.
    ColoredShape {
        /// Colour of the plate.
        color: BandColor,
        /// Shape printed on the plate.
        glyph: ShapeColor,
    },
    /// Arrow on a band plate.
    Arrow {
        /// Colour of the plate.
        color: BandColor,
    },
    /// Centre tile.
    Center,
    /// Filler tile.
    Filler,
}

/// Single integer summarising a cell for downstream consumers.
///
/// | Range  | Meaning                                    |
/// |--------|--------------------------------------------|
/// | -1     | centre                                     |
/// | 0      | filler                                     |
/// | 1..=6  | white plate, `shape = v - 1`               |
/// | 7..=30 | band plate, `band = (v-1)/6 - 1`, `shape = (v-1) % 6` |
/// | 31..=34| arrow, `band = v - 31`                     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedValue(i32);

impl EncodedValue {
    /// Value of the centre tile.
    pub const CENTER: EncodedValue = EncodedValue(-1);
    /// Value of filler tiles.
    pub const FILLER: EncodedValue = EncodedValue(0);
    /// Value of an arrow on a band 0 plate.
    pub const ARROW_BASE: i32 = 31;
    /// Width of the range reserved for each plate colour.
    pub const SHAPES_PER_BAND: i32 = 6;

    /// Wraps a raw integer read from an external source.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw integer representation.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Recovers tile content using the explicit tag stored with the value.
    pub fn decode(self, kind: TileKind) -> Result<DecodedTile, CodecError> {
        let out_of_range = CodecError::OutOfRange {
            value: self.0,
            kind,
        };
        let decoded = match kind {
            TileKind::WhiteShape => shape_from_offset(self.0 - 1).map(DecodedTile::WhiteShape),
            TileKind::ColoredShape => {
                let offset = self.0 - 1;
                let band = offset.div_euclid(Self::SHAPES_PER_BAND) - 1;
                band_from_index(band).and_then(|color| {
                    shape_from_offset(offset.rem_euclid(Self::SHAPES_PER_BAND))
                        .map(|glyph| DecodedTile::ColoredShape { color, glyph })
                })
            }
            TileKind::Arrow => {
                band_from_index(self.0 - Self::ARROW_BASE).map(|color| DecodedTile::Arrow { color })
            }
            TileKind::Center => (self == Self::CENTER).then_some(DecodedTile::Center),
            TileKind::Filler => (self == Self::FILLER).then_some(DecodedTile::Filler),
        };
        decoded.ok_or(out_of_range)
    }
}

fn shape_from_offset(offset: i32) -> Option<ShapeColor> {
    u8::try_from(offset).ok().and_then(ShapeColor::from_code)
}

fn band_from_index(index: i32) -> Option<BandColor> {
    u8::try_from(index).ok().and_then(BandColor::from_band)
}

/// Identifies the external asset the instantiation layer must load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetSelector {
    /// A base plate of the given colour.
    Plate(BasePlate),
    /// A shape marker.
    Shape(ShapeColor),
    /// The arrow marker.
    Arrow,
}

impl AssetSelector {
    /// Every selector a layout can reference.
    pub const ALL: [AssetSelector; 13] = [
        AssetSelector::Plate(BasePlate::White),
        AssetSelector::Plate(BasePlate::Black),
        AssetSelector::Plate(BasePlate::Band(BandColor::Green)),
        AssetSelector::Plate(BasePlate::Band(BandColor::Blue)),
        AssetSelector::Plate(BasePlate::Band(BandColor::Cyan)),
        AssetSelector::Plate(BasePlate::Band(BandColor::Magenta)),
        AssetSelector::Shape(ShapeColor::ALL[0]),
        AssetSelector::Shape(ShapeColor::ALL[1]),
        AssetSelector::Shape(ShapeColor::ALL[2]),
        AssetSelector::Shape(ShapeColor::ALL[3]),
        AssetSelector::Shape(ShapeColor::ALL[4]),
        AssetSelector::Shape(ShapeColor::ALL[5]),
        AssetSelector::Arrow,
    ];

    /// Stable textual key used by asset manifests.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Plate(BasePlate::White) => "plate.white",
            Self::Plate(BasePlate::Black) => "plate.black",
            Self::Plate(BasePlate::Band(BandColor::Green)) => "plate.green",
            Self::Plate(BasePlate::Band(BandColor::Blue)) => "plate.blue",
            Self::Plate(BasePlate::Band(BandColor::Cyan)) => "plate.cyan",
            Self::Plate(BasePlate::Band(BandColor::Magenta)) => "plate.magenta",
            Self::Shape(glyph) => match (glyph.shape(), glyph.tint()) {
                (Shape::Square, Tint::Yellow) => "shape.square_yellow",
                (Shape::Circle, Tint::Yellow) => "shape.circle_yellow",
                (Shape::Triangle, Tint::Yellow) => "shape.triangle_yellow",
                (Shape::Square, Tint::Red) => "shape.square_red",
                (Shape::Circle, Tint::Red) => "shape.circle_red",
                (Shape::Triangle, Tint::Red) => "shape.triangle_red",
            },
            Self::Arrow => "arrow",
        }
    }

    /// Resolves a manifest key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|selector| selector.key() == key)
    }
}

impl fmt::Display for AssetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
