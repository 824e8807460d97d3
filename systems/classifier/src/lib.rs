#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that assigns every arena cell a placement category.
//!
//! Classification is an ordered table of predicate rules evaluated top-down;
//! the first rule that claims a cell decides its [`Category`]. Bands closer to
//! the border come first, so a cell satisfying several geometric conditions
//! resolves to the outermost matching category. Cells that no rule claims are
//! [`Category::Filler`].
//!
//! The rules are written against the 9x9 reference grid. Other sizes are
//! classified proportionally: the distance from a row (or column) to the
//! nearest border is scaled onto the reference grid's half-width of 4 before
//! the rules inspect it. Band rules never claim the centre row or column,
//! which keeps the cross and its arrow endpoints intact for every valid size.

use vision_arena_core::{Arm, CellCoord, Category, GridSize, DEFAULT_GRID_SIDE};

/// Category of cells that no rule claims.
pub const RESIDUAL: Category = Category::Filler;

/// Geometric facts about a single cell inspected by rule predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    cell: CellCoord,
    center: u32,
    band_depth: Option<u32>,
    column_depth: u32,
}

impl Probe {
    /// Captures the facts describing `cell` within `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside `grid`.
    #[must_use]
    pub fn new(grid: GridSize, cell: CellCoord) -> Self {
        assert!(grid.contains(cell), "{cell:?} lies outside {grid}");
        let center = grid.center();
        let band_depth = (cell.row() != center).then(|| reference_depth(grid, cell.row()));
        Self {
            cell,
            center,
            band_depth,
            column_depth: reference_depth(grid, cell.column()),
        }
    }

    /// Distance from the cell's row to the nearest horizontal border, scaled
    /// onto the reference grid, or `None` on the centre row.
    #[must_use]
    pub const fn band_depth(&self) -> Option<u32> {
        self.band_depth
    }

    /// Distance from the cell's column to the nearest vertical border, scaled
    /// onto the reference grid.
    #[must_use]
    pub const fn column_depth(&self) -> u32 {
        self.column_depth
    }

    fn on_center_row(&self) -> bool {
        self.cell.row() == self.center
    }

    fn on_center_column(&self) -> bool {
        self.cell.column() == self.center
    }
}

/// Distance from `index` to the nearest border, rounded half up onto the
/// reference grid so that an N=9 grid keeps its exact depths.
fn reference_depth(grid: GridSize, index: u32) -> u32 {
    let depth = u64::from(index.min(grid.last() - index));
    let span = u64::from(grid.last());
    let reference_span = u64::from(DEFAULT_GRID_SIDE - 1);
    let scaled = (2 * depth * reference_span + span) / (2 * span);
    u32::try_from(scaled).expect("scaled depth never exceeds the reference half-width")
}

/// Named predicate that may claim a cell for a category.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    evaluate: fn(&Probe) -> Option<Category>,
}

impl Rule {
    /// Short identifier used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Category the rule assigns to the probed cell, if it claims it.
    #[must_use]
    pub fn evaluate(&self, probe: &Probe) -> Option<Category> {
        (self.evaluate)(probe)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

static RULES: [Rule; 7] = [
    Rule {
        name: "outer-ring",
        evaluate: outer_ring,
    },
    Rule {
        name: "corner-band",
        evaluate: corner_band,
    },
    Rule {
        name: "mid-ring",
        evaluate: mid_ring,
    },
    Rule {
        name: "inner-band",
        evaluate: inner_band,
    },
    Rule {
        name: "horizontal-arm",
        evaluate: horizontal_arm,
    },
    Rule {
        name: "vertical-arm",
        evaluate: vertical_arm,
    },
    Rule {
        name: "center",
        evaluate: center,
    },
];

fn outer_ring(probe: &Probe) -> Option<Category> {
    (probe.band_depth == Some(0) && !probe.on_center_column()).then_some(Category::OuterRing)
}

fn corner_band(probe: &Probe) -> Option<Category> {
    (probe.band_depth == Some(1) && probe.column_depth == 0).then_some(Category::CornerBand)
}

fn mid_ring(probe: &Probe) -> Option<Category> {
    (probe.band_depth == Some(2) && probe.column_depth != 1 && !probe.on_center_column())
        .then_some(Category::MidRing)
}

fn inner_band(probe: &Probe) -> Option<Category> {
    (probe.band_depth == Some(3) && probe.column_depth % 2 == 0 && !probe.on_center_column())
        .then_some(Category::InnerBand)
}

fn horizontal_arm(probe: &Probe) -> Option<Category> {
    if !probe.on_center_row() || probe.on_center_column() {
        return None;
    }
    let arm = if probe.cell.column() < probe.center {
        Arm::West
    } else {
        Arm::East
    };
    Some(Category::CrossArm(arm))
}

fn vertical_arm(probe: &Probe) -> Option<Category> {
    if !probe.on_center_column() || probe.on_center_row() {
        return None;
    }
    let arm = if probe.cell.row() < probe.center {
        Arm::North
    } else {
        Arm::South
    };
    Some(Category::CrossArm(arm))
}

fn center(probe: &Probe) -> Option<Category> {
    (probe.on_center_row() && probe.on_center_column()).then_some(Category::Center)
}

/// Ordered rule table, highest precedence first.
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Assigns the placement category of `cell`.
///
/// # Panics
///
/// Panics if `cell` lies outside `grid`.
#[must_use]
pub fn classify(grid: GridSize, cell: CellCoord) -> Category {
    let probe = Probe::new(grid, cell);
    RULES
        .iter()
        .find_map(|rule| rule.evaluate(&probe))
        .unwrap_or(RESIDUAL)
}

/// Every rule that would claim `cell`, in precedence order.
///
/// # Panics
///
/// Panics if `cell` lies outside `grid`.
pub fn matching_rules(grid: GridSize, cell: CellCoord) -> impl Iterator<Item = &'static Rule> {
    let probe = Probe::new(grid, cell);
    RULES
        .iter()
        .filter(move |rule| rule.evaluate(&probe).is_some())
}

/// Categories of every cell in row-major order.
#[must_use]
pub fn classify_grid(grid: GridSize) -> Vec<Category> {
    grid.cells().map(|cell| classify(grid, cell)).collect()
}
