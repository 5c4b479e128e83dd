use buildkit_core::component::ComponentRecord;
use buildkit_core::inventory::{Inventory, InventoryBuilder};
use buildkit_core::selection::{BuildKit, BuildSelector, KitError, KitRecord};
use buildkit_core::types::{KitId, SelectionResult};

const INVENTORY: &[&str] = &[
    "c1 CPU 50 200 AM4 65",
    "c2 CPU 90 350 AM4 105",
    "c3 CPU 70 300 LGA1700 125",
    "m1 Motherboard 30 150 AM4 DDR4",
    "g1 GPU 80 400 - 180",
    "r1 RAM 10 60 DDR4 -",
    "p1 PSU 5 90 300 -",
    "p2 PSU 5 120 500 -",
];

fn inventory() -> Inventory {
    let records: Vec<ComponentRecord> = INVENTORY
        .iter()
        .map(|l| ComponentRecord::from_line(l))
        .collect();
    InventoryBuilder::new().build(&records).0
}

fn kits(lines: &[&str]) -> Vec<KitRecord> {
    lines.iter().map(|l| KitRecord::from_line(l)).collect()
}

fn select(lines: &[&str], budget: i64) -> SelectionResult {
    BuildSelector::default().select(&inventory(), &kits(lines), budget)
}

#[test]
fn highest_scoring_valid_kit_wins() {
    let result = select(
        &["base c1 m1 g1 r1 p1", "upgrade c2 m1 g1 r1 p2", "intel c3 m1 g1 r1 p2"],
        2000,
    );

    assert_eq!(result.best_score, 90 + 30 + 80 + 10 + 5);
    assert_eq!(result.best_kit, Some(KitId::new("upgrade")));
    assert_eq!(result.selection.kits_valid, 2);
    assert_eq!(result.selection.kits_incompatible, 1);
}

#[test]
fn ties_keep_the_earliest_kit() {
    let result = select(&["first c1 m1 g1 r1 p1", "second c1 m1 g1 r1 p1"], 1000);

    assert_eq!(result.best_score, 175);
    assert_eq!(result.best_kit_label(), "first");
}

#[test]
fn unknown_reference_discards_kit() {
    let result = select(&["ghost c1 m1 g9 r1 p1"], 1000);

    assert_eq!(result.best_score, 0);
    assert_eq!(result.best_kit, None);
    assert_eq!(result.selection.kits_unresolvable, 1);
}

#[test]
fn wrong_category_at_any_position_discards_kit() {
    // GPU id in the RAM slot, everything else correct
    let result = select(&["swapped c1 m1 g1 g1 p1", "ok c1 m1 g1 r1 p1"], 1000);

    assert_eq!(result.best_kit_label(), "ok");
    assert_eq!(result.selection.kits_unresolvable, 1);

    let inventory = inventory();
    let kit = BuildKit::parse(&KitRecord::from_line("swapped c1 m1 g1 g1 p1")).unwrap();
    assert!(matches!(
        kit.resolve(&inventory),
        Err(KitError::CategoryMismatch { .. })
    ));
}

#[test]
fn kit_lines_need_exactly_six_fields() {
    let result = select(&["short c1 m1 g1 r1", "long c1 m1 g1 r1 p1 extra"], 1000);

    assert_eq!(result.best_kit, None);
    assert_eq!(result.selection.kits_malformed, 2);
    assert_eq!(
        BuildKit::parse(&KitRecord::from_line("short c1 m1 g1 r1")),
        Err(KitError::Malformed(5))
    );
}

#[test]
fn over_budget_kit_never_wins() {
    let result = select(&["base c1 m1 g1 r1 p1"], 899);

    assert_eq!(result.best_score, 0);
    assert_eq!(result.best_kit, None);
    assert_eq!(result.selection.kits_over_budget, 1);
}

#[test]
fn valid_zero_score_build_reads_as_no_build() {
    let records: Vec<ComponentRecord> = [
        "c0 CPU 0 0 AM4 0",
        "m0 Motherboard 0 0 AM4 DDR4",
        "g0 GPU 0 0 - 0",
        "r0 RAM 0 0 DDR4 -",
        "p0 PSU 0 0 50 -",
    ]
    .iter()
    .map(|l| ComponentRecord::from_line(l))
    .collect();
    let (inventory, _) = InventoryBuilder::new().build(&records);

    let result = BuildSelector::default().select(&inventory, &kits(&["zero c0 m0 g0 r0 p0"]), 0);

    assert_eq!(result.selection.kits_valid, 1);
    assert_eq!(result.best_score, 0);
    assert_eq!(result.best_kit, None);
}

#[test]
fn every_kit_is_accounted_for() {
    let result = select(
        &[
            "a c1 m1 g1 r1 p1",
            "b c1 m1 g1 r1",
            "c c1 m1 g7 r1 p1",
            "d c3 m1 g1 r1 p2",
            "e c2 m1 g1 r1 p2",
        ],
        900,
    );

    let m = &result.selection;
    assert_eq!(m.kits_considered, 5);
    assert_eq!(m.kits_valid, 1);
    assert_eq!(m.kits_malformed, 1);
    assert_eq!(m.kits_unresolvable, 1);
    assert_eq!(m.kits_incompatible, 1);
    assert_eq!(m.kits_over_budget, 1);
    assert_eq!(result.best_kit_label(), "a");
}
