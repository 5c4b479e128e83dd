use buildkit_core::component::ComponentRecord;
use buildkit_core::inventory::{Inventory, InventoryBuilder};
use buildkit_core::selection::{
    BuildKit, CompatibilityEngine, Incompatibility, KitRecord, SelectorConfig, Verdict,
};

struct Parts<'a> {
    cpu: &'a str,
    motherboard: &'a str,
    gpu: &'a str,
    ram: &'a str,
    psu: &'a str,
}

impl Default for Parts<'_> {
    fn default() -> Self {
        Parts {
            cpu: "c1 CPU 50 200 AM4 65",
            motherboard: "m1 Motherboard 30 150 AM4 DDR4",
            gpu: "g1 GPU 80 400 - 180",
            ram: "r1 RAM 10 60 DDR4 -",
            psu: "p1 PSU 5 90 300 -",
        }
    }
}

fn inventory(parts: Parts) -> Inventory {
    let records: Vec<ComponentRecord> = [parts.cpu, parts.motherboard, parts.gpu, parts.ram, parts.psu]
        .iter()
        .map(|l| ComponentRecord::from_line(l))
        .collect();
    InventoryBuilder::new().build(&records).0
}

fn kit() -> BuildKit {
    BuildKit::parse(&KitRecord::from_line("kit_A c1 m1 g1 r1 p1")).unwrap()
}

fn evaluate(parts: Parts, budget: i64) -> Verdict {
    let inventory = inventory(parts);
    let kit = kit();
    let build = kit.resolve(&inventory).unwrap();
    CompatibilityEngine::default().evaluate(&build, budget)
}

#[test]
fn reference_build_is_valid() {
    assert_eq!(evaluate(Parts::default(), 1000), Verdict::Valid);
}

#[test]
fn totals_sum_all_five_components() {
    let inventory = inventory(Parts::default());
    let kit = kit();
    let build = kit.resolve(&inventory).unwrap();

    assert_eq!(build.total_cost, 200 + 150 + 400 + 60 + 90);
    assert_eq!(build.total_performance_score, 50 + 30 + 80 + 10 + 5);
}

#[test]
fn socket_comparison_is_case_sensitive() {
    let verdict = evaluate(
        Parts {
            motherboard: "m1 Motherboard 30 150 am4 DDR4",
            ..Parts::default()
        },
        1000,
    );

    assert_eq!(
        verdict,
        Verdict::Incompatible(Incompatibility::SocketMismatch {
            cpu: "AM4".into(),
            motherboard: "am4".into(),
        })
    );
}

#[test]
fn ram_type_comparison_is_case_sensitive() {
    let verdict = evaluate(
        Parts {
            ram: "r1 RAM 10 60 ddr4 -",
            ..Parts::default()
        },
        1000,
    );

    assert!(matches!(
        verdict,
        Verdict::Incompatible(Incompatibility::RamTypeMismatch { .. })
    ));
}

#[test]
fn psu_needs_full_fifty_watt_buffer() {
    // 65 + 180 + 49
    let short = evaluate(
        Parts {
            psu: "p1 PSU 5 90 294 -",
            ..Parts::default()
        },
        1000,
    );
    assert_eq!(
        short,
        Verdict::Incompatible(Incompatibility::InsufficientPower {
            wattage: 294,
            required: 295,
        })
    );

    // 65 + 180 + 50
    let exact = evaluate(
        Parts {
            psu: "p1 PSU 5 90 295 -",
            ..Parts::default()
        },
        1000,
    );
    assert_eq!(exact, Verdict::Valid);
}

#[test]
fn coerced_tdp_counts_as_zero_draw() {
    let verdict = evaluate(
        Parts {
            cpu: "c1 CPU 50 200 AM4 unknown",
            gpu: "g1 GPU 80 400 - -5",
            psu: "p1 PSU 5 90 50 -",
            ..Parts::default()
        },
        1000,
    );
    assert_eq!(verdict, Verdict::Valid);
}

#[test]
fn budget_is_inclusive() {
    assert_eq!(evaluate(Parts::default(), 900), Verdict::Valid);
    assert_eq!(
        evaluate(Parts::default(), 899),
        Verdict::OverBudget {
            total_cost: 900,
            budget: 899,
        }
    );
}

#[test]
fn compatibility_rules_are_checked_before_budget() {
    // Breaks the socket rule and the budget; the socket rule is reported.
    let verdict = evaluate(
        Parts {
            cpu: "c1 CPU 50 200 LGA1700 65",
            ..Parts::default()
        },
        10,
    );
    assert!(matches!(
        verdict,
        Verdict::Incompatible(Incompatibility::SocketMismatch { .. })
    ));
}

#[test]
fn buffer_comes_from_config() {
    let inventory = inventory(Parts::default());
    let kit = kit();
    let build = kit.resolve(&inventory).unwrap();

    let strict = CompatibilityEngine::new(&SelectorConfig { psu_buffer_watts: 100 });
    assert!(!strict.is_valid(&build, 1000));
    assert!(CompatibilityEngine::new(&SelectorConfig::v0()).is_valid(&build, 1000));
}

#[test]
fn tdp_beyond_i64_saturates_instead_of_vanishing() {
    let verdict = evaluate(
        Parts {
            cpu: "c1 CPU 50 200 AM4 100000000000000000000",
            ..Parts::default()
        },
        1000,
    );

    assert_eq!(
        verdict,
        Verdict::Incompatible(Incompatibility::InsufficientPower {
            wattage: 300,
            required: i64::MAX,
        })
    );
}

#[test]
fn huge_psu_wattage_covers_any_draw() {
    let verdict = evaluate(
        Parts {
            gpu: "g1 GPU 80 400 - 9223372036854775807",
            psu: "p1 PSU 5 90 100000000000000000000 -",
            ..Parts::default()
        },
        1000,
    );
    assert_eq!(verdict, Verdict::Valid);
}
