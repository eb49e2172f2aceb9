//! 저장소 복원/기록과 계산기 세션 테스트.
use serde_json::json;
use water_treatment_calculator::fields::Field;
use water_treatment_calculator::inputs::{PlantInputs, UnitPrices};
use water_treatment_calculator::persistence::{self, STORE_KEYS};
use water_treatment_calculator::session::Calculator;
use water_treatment_calculator::sizing;
use water_treatment_calculator::store::{JsonFileStore, MemoryStore, SettingsStore};

#[test]
fn empty_store_restores_defaults() {
    let calc = Calculator::open(MemoryStore::new());
    assert_eq!(*calc.inputs(), PlantInputs::default());
    assert_eq!(*calc.results(), sizing::compute(&PlantInputs::default()));
}

#[test]
fn stored_values_are_restored() {
    let store = MemoryStore::with_entries([
        ("apts", json!(320)),
        ("occ", json!(0.8)),
        ("nplus1", json!(false)),
        ("prices", json!({ "nf": 200000, "tank5m3": 99000 })),
        ("defs", json!({ "tanks": 3, "inoxM": 250, "pexM": 900, "roomM2": 30 })),
        ("opex", json!({ "inflation": 5.5, "serviceY1": 0 })),
    ]);
    let inputs = persistence::restore_inputs(&store);
    assert_eq!(inputs.apartments, 320.0);
    assert_eq!(inputs.occupancy, 0.8);
    assert!(!inputs.n_plus_one);
    assert_eq!(inputs.prices.nf, 200_000.0);
    assert_eq!(inputs.prices.tank, 99_000.0);
    // 레코드에 없는 멤버는 기본값
    assert_eq!(inputs.prices.uf, UnitPrices::default().uf);
    assert_eq!(inputs.quantities.tanks, 3.0);
    assert_eq!(inputs.opex.inflation_pct, 5.5);
    assert_eq!(inputs.opex.service_first_year, 0.0);
    assert_eq!(inputs.opex.load_factor, 0.35);
}

#[test]
fn malformed_values_fall_back_to_key_default() {
    let store = MemoryStore::with_entries([
        ("apts", json!("many")),
        ("kh", json!(null)),
        ("nplus1", json!("yes")),
        ("prices", json!("cheap")),
        ("opex", json!({ "loadFactor": "high" })),
        ("ks", json!(1.5)),
    ]);
    let inputs = persistence::restore_inputs(&store);
    let defaults = PlantInputs::default();
    assert_eq!(inputs.apartments, defaults.apartments);
    assert_eq!(inputs.peak_hour_factor, defaults.peak_hour_factor);
    assert_eq!(inputs.n_plus_one, defaults.n_plus_one);
    assert_eq!(inputs.prices, defaults.prices);
    assert_eq!(inputs.opex, defaults.opex);
    assert_eq!(inputs.safety_factor, 1.5);
}

#[test]
fn restored_values_are_clamped() {
    let store = MemoryStore::with_entries([
        ("occ", json!(5)),
        ("nfmod", json!(0)),
        ("defs", json!({ "tanks": -4 })),
    ]);
    let inputs = persistence::restore_inputs(&store);
    assert_eq!(inputs.occupancy, 1.0);
    assert_eq!(inputs.nf_module_m3_per_h, 1.0);
    assert_eq!(inputs.quantities.tanks, 0.0);
}

#[test]
fn edits_are_clamped_persisted_and_recomputed() {
    let mut calc = Calculator::open(MemoryStore::new());
    let stored = calc.set(Field::Occupancy, 5.0);
    assert_eq!(stored, 1.0);
    assert_eq!(calc.inputs().occupancy, 1.0);
    assert_eq!(calc.store().get("occ"), Some(json!(1.0)));
    assert_eq!(*calc.results(), sizing::compute(calc.inputs()));
    assert!((calc.results().demand.population - 1500.0).abs() < 1e-9);

    calc.set(Field::PriceUv, 90_000.0);
    let prices = calc.store().get("prices").expect("prices written");
    assert_eq!(prices["uv"], json!(90_000.0));
    assert_eq!(prices["nf"], json!(185_450.0));
}

#[test]
fn text_edits_use_zero_or_minimum_for_garbage() {
    let mut calc = Calculator::open(MemoryStore::new());
    assert_eq!(calc.set_text(Field::Apartments, "lots"), 1.0);
    assert_eq!(calc.set_text(Field::ServiceFirstYear, "n/a"), 0.0);
    assert_eq!(calc.set_text(Field::LitersPerPersonDay, "200,5"), 200.5);
}

#[test]
fn toggling_redundancy_is_persisted() {
    let mut calc = Calculator::open(MemoryStore::new());
    calc.set(Field::Apartments, 1.0);
    calc.set_n_plus_one(false);
    assert_eq!(calc.store().get("nplus1"), Some(json!(false)));
    assert_eq!(calc.results().equipment.uv_units, 1);
    calc.set_n_plus_one(true);
    assert_eq!(calc.results().equipment.uv_units, 2);
}

#[test]
fn unavailable_store_is_ignored() {
    let mut calc = Calculator::open(MemoryStore::unavailable());
    let stored = calc.set(Field::Apartments, 42.0);
    assert_eq!(stored, 42.0);
    assert_eq!(calc.inputs().apartments, 42.0);
    assert!(calc.store().is_empty());
    calc.reset();
    assert_eq!(*calc.inputs(), PlantInputs::default());
}

#[test]
fn reset_writes_every_key() {
    let mut calc = Calculator::open(MemoryStore::with_entries([("apts", json!(10))]));
    assert_eq!(calc.inputs().apartments, 10.0);
    calc.reset();
    assert_eq!(*calc.inputs(), PlantInputs::default());
    let store = calc.into_store();
    assert_eq!(store.len(), STORE_KEYS.len());
    assert_eq!(store.get("apts"), Some(json!(500.0)));
}

#[test]
fn session_survives_reopen() {
    let mut calc = Calculator::open(MemoryStore::new());
    calc.set(Field::Apartments, 120.0);
    calc.set(Field::InflationPct, 7.0);
    calc.set_n_plus_one(false);
    let before = calc.results().clone();

    let reopened = Calculator::open(calc.into_store());
    assert_eq!(reopened.inputs().apartments, 120.0);
    assert_eq!(reopened.inputs().opex.inflation_pct, 7.0);
    assert!(!reopened.inputs().n_plus_one);
    assert_eq!(*reopened.results(), before);
}

#[test]
fn json_file_store_round_trip() {
    let dir = std::env::temp_dir().join(format!("wtc_store_{}", std::process::id()));
    let path = dir.join("nested").join("state.json");
    let _ = std::fs::remove_dir_all(&dir);

    let mut calc = Calculator::open(JsonFileStore::open(&path));
    calc.set(Field::PeoplePerApartment, 2.5);
    calc.set(Field::RoomArea, 55.0);
    assert!(path.exists());

    let reopened = Calculator::open(JsonFileStore::open(&path));
    assert_eq!(reopened.inputs().people_per_apartment, 2.5);
    assert_eq!(reopened.inputs().quantities.room_m2, 55.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_json_file_starts_empty() {
    let dir = std::env::temp_dir().join(format!("wtc_corrupt_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("state.json");
    std::fs::write(&path, "{ not json").expect("write");

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("apts"), None);
    let calc = Calculator::open(store);
    assert_eq!(*calc.inputs(), PlantInputs::default());

    let _ = std::fs::remove_dir_all(&dir);
}
