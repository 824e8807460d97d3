//! Layout generation: random draws, palette assignment and tile resolution.

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::trace;
use vision_arena_core::{
    AssetSelector, BandColor, CellCoord, Category, EncodedValue, GridSize, Palette, ShapeColor,
    Tile,
};
use vision_arena_system_classifier::classify;
use vision_arena_system_placement::{Placement, PlacementTuning, Pose};

/// Asset instance the physics layer is expected to materialise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Asset to load.
    pub asset: AssetSelector,
    /// Where and how to place it.
    pub pose: Pose,
}

/// Immutable description of a single generated cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coord: CellCoord,
    category: Category,
    tile: Tile,
    encoded: EncodedValue,
    plate: Instance,
    marker: Option<Instance>,
}

impl Cell {
    /// Row and column of the cell.
    #[must_use]
    pub const fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Category assigned by the position classifier.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Explicit content tag of the cell.
    #[must_use]
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Compact integer handed to downstream consumers.
    #[must_use]
    pub const fn encoded(&self) -> EncodedValue {
        self.encoded
    }

    /// Reports whether the cell holds an arrow marker.
    #[must_use]
    pub const fn is_arrow(&self) -> bool {
        self.tile.is_arrow()
    }

    /// Base plate laid under the cell.
    #[must_use]
    pub const fn plate(&self) -> Instance {
        self.plate
    }

    /// Shape or arrow placed on top of the plate.
    #[must_use]
    pub const fn marker(&self) -> Option<Instance> {
        self.marker
    }

    /// Topmost instance of the cell: the marker when present, else the plate.
    #[must_use]
    pub fn primary(&self) -> Instance {
        self.marker.unwrap_or(self.plate)
    }

    /// World position of the topmost instance.
    #[must_use]
    pub fn world_pose(&self) -> Pose {
        self.primary().pose
    }

    /// Asset selector of the topmost instance.
    #[must_use]
    pub fn asset_selector(&self) -> AssetSelector {
        self.primary().asset
    }

    /// Every instance of the cell, plate first.
    pub fn instances(&self) -> impl Iterator<Item = Instance> {
        std::iter::once(self.plate).chain(self.marker)
    }
}

/// Complete generated layout stored as a flat row-major grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    size: GridSize,
    palette: Palette,
    cells: Vec<Cell>,
}

impl Arena {
    /// Generates a layout, drawing every random value from `rng`.
    ///
    /// A shape code is drawn for every cell in row-major order before the
    /// palette is shuffled, including cells whose draw is later discarded.
    pub fn generate<R>(size: GridSize, tuning: PlacementTuning, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let draws: Vec<ShapeColor> = (0..size.cell_count()).map(|_| draw_shape(rng)).collect();
        let palette = draw_palette(rng);
        let placement = Placement::new(size, tuning);

        let cells = size
            .cells()
            .zip(draws)
            .map(|(coord, glyph)| {
                let category = classify(size, coord);
                let tile = resolve_tile(size, coord, category, glyph, &palette);
                if let Tile::Arrow { color, arm } = tile {
                    trace!(?arm, ?color, row = coord.row(), column = coord.column(), "arrow placed");
                }
                Cell {
                    coord,
                    category,
                    tile,
                    encoded: tile.encode(),
                    plate: Instance {
                        asset: AssetSelector::Plate(tile.plate()),
                        pose: placement.plate_pose(coord),
                    },
                    marker: tile.marker_asset().and_then(|asset| {
                        placement
                            .marker_pose(coord, &tile)
                            .map(|pose| Instance { asset, pose })
                    }),
                }
            })
            .collect();

        Self {
            size,
            palette,
            cells,
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Colours assigned to the cross arms.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Every cell in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell stored at `coord`, if it lies inside the grid.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.size.index(coord).and_then(|index| self.cells.get(index))
    }

    /// Encoded values grouped by row.
    #[must_use]
    pub fn encoded_rows(&self) -> Vec<Vec<i32>> {
        let side = self.size.side() as usize;
        self.cells
            .chunks(side)
            .map(|row| row.iter().map(|cell| cell.encoded.get()).collect())
            .collect()
    }
}

fn draw_shape<R>(rng: &mut R) -> ShapeColor
where
    R: Rng + ?Sized,
{
    ShapeColor::ALL[usize::from(rng.gen_range(0..ShapeColor::COUNT))]
}

fn draw_palette<R>(rng: &mut R) -> Palette
where
    R: Rng + ?Sized,
{
    let mut colors = BandColor::ALL;
    colors.shuffle(rng);
    Palette::new(colors).expect("a shuffled palette keeps every colour exactly once")
}

fn resolve_tile(
    size: GridSize,
    coord: CellCoord,
    category: Category,
    glyph: ShapeColor,
    palette: &Palette,
) -> Tile {
    match category {
        Category::OuterRing | Category::CornerBand | Category::MidRing | Category::InnerBand => {
            Tile::WhiteShape(glyph)
        }
        Category::CrossArm(arm) => {
            let color = palette.color_for(arm);
            if arm.is_endpoint(size, coord) {
                Tile::Arrow { color, arm }
            } else {
                Tile::ColoredShape { color, glyph }
            }
        }
        Category::Center => Tile::Center,
        Category::Filler => Tile::Filler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use vision_arena_core::{Arm, BasePlate, Shape, Tint};

    fn reference_arena(seed: u64) -> Arena {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Arena::generate(GridSize::default(), PlacementTuning::default(), &mut rng)
    }

    #[test]
    fn resolve_tile_follows_category() {
        let grid = GridSize::default();
        let glyph = ShapeColor::new(Shape::Circle, Tint::Yellow);
        let palette = Palette::REFERENCE;

        assert_eq!(
            resolve_tile(grid, CellCoord::new(0, 0), Category::OuterRing, glyph, &palette),
            Tile::WhiteShape(glyph)
        );
        assert_eq!(
            resolve_tile(
                grid,
                CellCoord::new(4, 0),
                Category::CrossArm(Arm::West),
                glyph,
                &palette
            ),
            Tile::Arrow {
                color: BandColor::Green,
                arm: Arm::West,
            }
        );
        assert_eq!(
            resolve_tile(
                grid,
                CellCoord::new(6, 4),
                Category::CrossArm(Arm::South),
                glyph,
                &palette
            ),
            Tile::ColoredShape {
                color: BandColor::Magenta,
                glyph,
            }
        );
        assert_eq!(
            resolve_tile(grid, CellCoord::new(1, 1), Category::Filler, glyph, &palette),
            Tile::Filler
        );
    }

    #[test]
    fn cells_are_stored_row_major() {
        let arena = reference_arena(3);
        for (index, cell) in arena.cells().iter().enumerate() {
            assert_eq!(arena.size().index(cell.coord()), Some(index));
        }
        assert_eq!(arena.cells().len(), 81);
    }

    #[test]
    fn markers_exist_only_for_shapes_and_arrows() {
        let arena = reference_arena(11);
        for cell in arena.cells() {
            let expects_marker = cell.tile().shape().is_some() || cell.is_arrow();
            assert_eq!(cell.marker().is_some(), expects_marker, "{cell:?}");
            assert_eq!(cell.instances().count(), 1 + usize::from(expects_marker));
        }
    }

    #[test]
    fn primary_instance_prefers_marker() {
        let arena = reference_arena(5);
        let center = arena.cell(CellCoord::new(4, 4)).expect("centre exists");
        assert_eq!(
            center.asset_selector(),
            AssetSelector::Plate(BasePlate::White)
        );
        let arrow = arena.cell(CellCoord::new(0, 4)).expect("arrow exists");
        assert_eq!(arrow.asset_selector(), AssetSelector::Arrow);
        assert_eq!(arrow.world_pose(), arrow.marker().expect("marker").pose);
    }

    #[test]
    fn encoded_rows_mirror_cells() {
        let arena = reference_arena(8);
        let rows = arena.encoded_rows();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4][4], -1);
        assert_eq!(rows[1][1], 0);
        assert!((31..=34).contains(&rows[4][0]));
    }
}
