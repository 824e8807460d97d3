#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that converts grid cells into world-space poses.
//!
//! Rows advance along negative X and columns along negative Y, both measured
//! from an origin chosen so the grid is centred on the world origin. The Z
//! axis is vertical: base plates rest at `plate_height` and markers sit on top
//! of them at `marker_height`.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use vision_arena_core::{Arm, CellCoord, GridSize, Shape, Tile};

/// Direction the arrow asset points towards before any rotation is applied.
pub const ARROW_FORWARD: Vec3 = Vec3::NEG_X;

/// Rotation about the vertical axis applied to every shape marker.
pub const SHAPE_HEADING: f32 = PI;

/// Spacing and height parameters used to lay out the arena.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementTuning {
    /// Distance between neighbouring cell centres in world units.
    pub step: f32,
    /// Offset along both horizontal axes compensating for the triangle asset origin.
    pub triangle_offset: f32,
    /// Height at which base plates are placed.
    pub plate_height: f32,
    /// Height at which markers are placed on top of the plates.
    pub marker_height: f32,
}

impl Default for PlacementTuning {
    fn default() -> Self {
        Self {
            step: 0.75,
            triangle_offset: 0.2,
            plate_height: 0.0,
            marker_height: 0.03,
        }
    }
}

/// World-space position and orientation of an instantiated asset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Location of the asset origin.
    pub position: Vec3,
    /// Rotation of the asset.
    pub orientation: Quat,
}

impl Pose {
    /// Creates a pose rotated about the vertical axis by `heading` radians.
    #[must_use]
    pub fn with_heading(position: Vec3, heading: f32) -> Self {
        Self {
            position,
            orientation: Quat::from_rotation_z(heading),
        }
    }
}

/// Computes plate and marker poses for a grid of a given size.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    tuning: PlacementTuning,
    origin: f32,
}

impl Placement {
    /// Creates a placement system for the provided grid.
    #[must_use]
    pub fn new(grid: GridSize, tuning: PlacementTuning) -> Self {
        Self {
            tuning,
            origin: grid.center() as f32 * tuning.step,
        }
    }

    /// Pose of the base plate under `cell`.
    #[must_use]
    pub fn plate_pose(&self, cell: CellCoord) -> Pose {
        Pose {
            position: self.anchor(cell, self.tuning.plate_height),
            orientation: Quat::IDENTITY,
        }
    }

    /// Pose of the marker placed on `cell`, if the tile carries one.
    #[must_use]
    pub fn marker_pose(&self, cell: CellCoord, tile: &Tile) -> Option<Pose> {
        let anchor = self.anchor(cell, self.tuning.marker_height);
        match tile {
            Tile::WhiteShape(glyph) | Tile::ColoredShape { glyph, .. } => {
                let position = match glyph.shape() {
                    Shape::Triangle => {
                        anchor
                            + Vec3::new(self.tuning.triangle_offset, self.tuning.triangle_offset, 0.0)
                    }
                    Shape::Square | Shape::Circle => anchor,
                };
                Some(Pose::with_heading(position, SHAPE_HEADING))
            }
            Tile::Arrow { arm, .. } => Some(Pose::with_heading(anchor, arrow_heading(*arm))),
            Tile::Center | Tile::Filler => None,
        }
    }

    fn anchor(&self, cell: CellCoord, height: f32) -> Vec3 {
        Vec3::new(
            self.origin - cell.row() as f32 * self.tuning.step,
            self.origin - cell.column() as f32 * self.tuning.step,
            height,
        )
    }
}

/// Rotation about the vertical axis that points an arrow away from the centre.
#[must_use]
pub fn arrow_heading(arm: Arm) -> f32 {
    match arm {
        Arm::West => -FRAC_PI_2,
        Arm::East => FRAC_PI_2,
        Arm::North => PI,
        Arm::South => 0.0,
    }
}
