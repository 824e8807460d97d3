#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative arena state management for Vision Arena.
//!
//! The world owns exactly one generated [`Arena`]. Adapters mutate it only by
//! submitting [`Command`] values to [`apply`]; every command discards the
//! whole layout and regenerates it from a seeded random source, so two worlds
//! that receive the same commands always hold identical layouts.

mod generation;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vision_arena_core::{Command, Event, GridSize};
use vision_arena_system_placement::PlacementTuning;

pub use generation::{Arena, Cell, Instance};

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0;

/// Parameters that fully determine a generated layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Side length of the grid.
    pub size: GridSize,
    /// Seed fed to the deterministic random source.
    pub seed: u64,
    /// Spacing and heights used when placing assets.
    pub placement: PlacementTuning,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            seed: DEFAULT_SEED,
            placement: PlacementTuning::default(),
        }
    }
}

/// Represents the authoritative Vision Arena world state.
#[derive(Debug)]
pub struct World {
    config: ArenaConfig,
    arena: Arena,
}

impl World {
    /// Creates a world holding the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Creates a world holding the layout described by `config`.
    #[must_use]
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            arena: generate(&config),
            config,
        }
    }

    fn regenerate(&mut self, out_events: &mut Vec<Event>) {
        self.arena = generate(&self.config);
        out_events.push(Event::ArenaGenerated {
            size: self.config.size,
            seed: self.config.seed,
            palette: self.arena.palette(),
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn generate(config: &ArenaConfig) -> Arena {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let arena = Arena::generate(config.size, config.placement, &mut rng);
    debug!(
        size = %config.size,
        seed = config.seed,
        palette = ?arena.palette().colors(),
        "arena generated"
    );
    arena
}

/// Applies the provided command to the world, regenerating the layout.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureArena { size } => {
            world.config.size = size;
            world.regenerate(out_events);
        }
        Command::ResetArena { seed } => {
            world.config.seed = seed;
            world.regenerate(out_events);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use serde::{Deserialize, Serialize};
    use vision_arena_core::{CellCoord, EncodedValue, GridSize, Palette};

    use super::{Arena, ArenaConfig, Cell, World};

    /// Provides read-only access to the current layout.
    #[must_use]
    pub fn arena(world: &World) -> &Arena {
        &world.arena
    }

    /// Provides read-only access to the configuration of the current layout.
    #[must_use]
    pub fn config(world: &World) -> &ArenaConfig {
        &world.config
    }

    /// Looks up a single cell of the current layout.
    #[must_use]
    pub fn cell(world: &World, coord: CellCoord) -> Option<&Cell> {
        world.arena.cell(coord)
    }

    /// Encoded values of every cell in row-major order.
    #[must_use]
    pub fn encoded_values(world: &World) -> Vec<EncodedValue> {
        world.arena.cells().iter().map(Cell::encoded).collect()
    }

    /// Captures an owned snapshot that outlives later regenerations.
    #[must_use]
    pub fn layout(world: &World) -> ArenaLayout {
        ArenaLayout {
            size: world.arena.size(),
            seed: world.config.seed,
            palette: world.arena.palette(),
            cells: world.arena.cells().to_vec(),
        }
    }

    /// Owned, serialisable snapshot of a generated layout.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ArenaLayout {
        /// Side length of the grid.
        pub size: GridSize,
        /// Seed that produced the layout.
        pub seed: u64,
        /// Colours assigned to the cross arms.
        pub palette: Palette,
        /// Every cell in row-major order.
        pub cells: Vec<Cell>,
    }
}
