use std::collections::HashSet;

use proptest::prelude::*;
use vision_arena_core::{
    Arm, BandColor, CellCoord, Category, Command, DecodedTile, EncodedValue, GridSize, Palette,
    Tile,
};
use vision_arena_world::{self as world, query, ArenaConfig, World};

fn odd_grid() -> impl Strategy<Value = GridSize> {
    (2_u32..10).prop_map(|half| GridSize::new(half * 2 + 1).expect("odd side"))
}

fn world_for(size: GridSize, seed: u64) -> World {
    World::with_config(ArenaConfig {
        size,
        seed,
        ..ArenaConfig::default()
    })
}

proptest! {
    #[test]
    fn single_center_marker_sits_in_the_middle(size in odd_grid(), seed in any::<u64>()) {
        let world = world_for(size, seed);
        let centers: Vec<CellCoord> = query::arena(&world)
            .cells()
            .iter()
            .filter(|cell| cell.encoded() == EncodedValue::CENTER)
            .map(|cell| cell.coord())
            .collect();
        prop_assert_eq!(centers, vec![size.center_cell()]);
    }

    #[test]
    fn four_arrows_carry_distinct_bands(size in odd_grid(), seed in any::<u64>()) {
        let world = world_for(size, seed);
        let arena = query::arena(&world);
        let mut arms = HashSet::new();
        let mut bands = HashSet::new();

        for cell in arena.cells().iter().filter(|cell| cell.is_arrow()) {
            let Tile::Arrow { color, arm } = cell.tile() else {
                unreachable!("is_arrow reported a non-arrow tile");
            };
            prop_assert_eq!(cell.coord(), arm.endpoint(size));
            prop_assert_eq!(color, arena.palette().color_for(arm));
            prop_assert_eq!(cell.encoded().get(), i32::from(color.band()) + 31);
            prop_assert!(arms.insert(arm));
            prop_assert!(bands.insert(color.band()));
        }

        prop_assert_eq!(arms.len(), 4);
        prop_assert_eq!(bands.len(), 4);
    }

    #[test]
    fn palette_is_a_permutation(seed in any::<u64>()) {
        let world = world_for(GridSize::default(), seed);
        let mut colors = query::arena(&world).palette().colors().to_vec();
        colors.sort_by_key(|color| color.band());
        prop_assert_eq!(colors, BandColor::ALL.to_vec());
    }

    #[test]
    fn encoded_values_decode_back_to_their_tiles(size in odd_grid(), seed in any::<u64>()) {
        let world = world_for(size, seed);
        for cell in query::arena(&world).cells() {
            let tile = cell.tile();
            let decoded = cell.encoded().decode(tile.kind()).expect("generated values decode");
            let expected = match tile {
                Tile::WhiteShape(glyph) => DecodedTile::WhiteShape(glyph),
                Tile::ColoredShape { color, glyph } => DecodedTile::ColoredShape { color, glyph },
                Tile::Arrow { color, .. } => DecodedTile::Arrow { color },
                Tile::Center => DecodedTile::Center,
                Tile::Filler => DecodedTile::Filler,
            };
            prop_assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn cross_arm_cells_use_their_arm_colour(size in odd_grid(), seed in any::<u64>()) {
        let world = world_for(size, seed);
        let arena = query::arena(&world);
        for cell in arena.cells() {
            if let Category::CrossArm(arm) = cell.category() {
                let expected = arena.palette().color_for(arm);
                match cell.tile() {
                    Tile::ColoredShape { color, .. } | Tile::Arrow { color, .. } => {
                        prop_assert_eq!(color, expected);
                    }
                    other => prop_assert!(false, "arm cell resolved to {:?}", other),
                }
            }
        }
    }
}

#[test]
fn reference_grid_scenario() {
    let world = World::new();
    let cell = |row, column| query::cell(&world, CellCoord::new(row, column)).expect("inside");

    let corner = cell(0, 0);
    assert_eq!(corner.category(), Category::OuterRing);
    assert!(matches!(corner.tile(), Tile::WhiteShape(_)));
    assert!((1..=6).contains(&corner.encoded().get()));

    assert_eq!(cell(4, 4).encoded(), EncodedValue::CENTER);
    assert_eq!(cell(1, 1).encoded(), EncodedValue::FILLER);
    assert!((31..=34).contains(&cell(4, 0).encoded().get()));

    let west = cell(4, 0).tile();
    let east = cell(4, 8).tile();
    assert_ne!(west, east);
    assert!(matches!(west, Tile::Arrow { arm: Arm::West, .. }));
    assert!(matches!(east, Tile::Arrow { arm: Arm::East, .. }));
}

#[test]
fn resizing_keeps_the_seed() {
    let mut world = world_for(GridSize::default(), 12);
    let mut events = Vec::new();
    let size = GridSize::new(13).expect("valid");

    world::apply(&mut world, Command::ConfigureArena { size }, &mut events);

    assert_eq!(query::config(&world).seed, 12);
    assert_eq!(query::layout(&world), query::layout(&world_for(size, 12)));
}

#[test]
fn snapshot_serialises_to_json() {
    let layout = query::layout(&World::new());
    let json = serde_json::to_string(&layout).expect("layout serialises");
    let restored: query::ArenaLayout = serde_json::from_str(&json).expect("layout parses");
    assert_eq!(restored.size, layout.size);
    assert_eq!(restored.palette, layout.palette);
    assert_eq!(restored.cells.len(), layout.cells.len());
}

#[test]
fn snapshot_with_repeated_palette_colours_is_rejected() {
    let layout = query::layout(&World::new());
    let mut json: serde_json::Value = serde_json::to_value(&layout).expect("layout serialises");
    json["palette"] = serde_json::json!(["Green", "Green", "Green", "Green"]);
    assert!(serde_json::from_value::<query::ArenaLayout>(json).is_err());
    assert!(serde_json::from_str::<Palette>(r#"["Cyan","Cyan","Blue","Green"]"#).is_err());
}
