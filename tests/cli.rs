//! 대화형 메뉴와 키 기반 편집 테스트. 입력은 메모리 버퍼로 흘려 넣는다.
use std::io::Cursor;

use water_treatment_calculator::app::{self, AppError};
use water_treatment_calculator::i18n::Translator;
use water_treatment_calculator::session::Calculator;
use water_treatment_calculator::store::{MemoryStore, SettingsStore};
use water_treatment_calculator::ui_cli::{self, Console, MenuChoice};

fn run_script(calc: &mut Calculator<MemoryStore>, lang: &str, script: &str) -> String {
    let tr = Translator::new(lang);
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    app::run(calc, &tr, &mut console).expect("menu loop");
    String::from_utf8(console.into_output()).expect("utf-8 output")
}

#[test]
fn exit_and_end_of_input_stop_the_loop() {
    let mut calc = Calculator::open(MemoryStore::new());
    let out = run_script(&mut calc, "en", "0\n");
    assert!(out.contains("Exiting application."), "{out}");

    let out = run_script(&mut calc, "en", "");
    assert!(out.contains("Exiting application."), "{out}");
}

#[test]
fn unknown_menu_entry_asks_again() {
    let tr = Translator::new("en");
    let mut console = Console::new(Cursor::new("9\n1\n"), Vec::new());
    let choice = ui_cli::main_menu(&tr, &mut console).expect("menu");
    assert_eq!(choice, MenuChoice::ShowResults);
}

#[test]
fn quick_edit_is_saved_and_reported() {
    let mut calc = Calculator::open(MemoryStore::new());
    let out = run_script(&mut calc, "en", "2\n1\n320\n\n0\n");
    assert!(out.contains("Saved: Apartments, pcs = 320"), "{out}");
    assert_eq!(calc.inputs().apartments, 320.0);
    assert!(calc.store().get("apts").is_some());
    assert!(out.contains("Population, people: 912"), "{out}");
}

#[test]
fn out_of_range_edit_is_clamped() {
    let mut calc = Calculator::open(MemoryStore::new());
    // 고급 목록의 첫 항목은 입주율
    run_script(&mut calc, "en", "3\n1\n7\n\n0\n");
    assert_eq!(calc.inputs().occupancy, 1.0);
}

#[test]
fn toggle_and_reset_from_menu() {
    let mut calc = Calculator::open(MemoryStore::new());
    let out = run_script(&mut calc, "en", "4\n");
    assert!(out.contains("N+1 redundancy: off"), "{out}");
    assert!(!calc.inputs().n_plus_one);

    calc.set_text(water_treatment_calculator::fields::Field::Apartments, "77");
    let out = run_script(&mut calc, "en", "5\n0\n");
    assert!(out.contains("All parameters were reset to defaults."), "{out}");
    assert!(calc.inputs().n_plus_one);
    assert_eq!(calc.inputs().apartments, 500.0);
}

#[test]
fn set_by_key_handles_numbers_and_toggle() {
    let mut calc = Calculator::open(MemoryStore::new());
    assert_eq!(app::set_by_key(&mut calc, "prices.nf", "190000").unwrap(), "190000");
    assert_eq!(calc.inputs().prices.nf, 190_000.0);
    assert_eq!(app::set_by_key(&mut calc, "occ", "2").unwrap(), "1");
    assert_eq!(app::set_by_key(&mut calc, "NPLUS1", "off").unwrap(), "false");
    assert!(!calc.inputs().n_plus_one);
}

#[test]
fn set_by_key_rejects_unknown_input() {
    let mut calc = Calculator::open(MemoryStore::new());
    assert!(matches!(
        app::set_by_key(&mut calc, "flux", "1"),
        Err(AppError::UnknownField(_))
    ));
    assert!(matches!(
        app::set_by_key(&mut calc, "nplus1", "maybe"),
        Err(AppError::InvalidToggle(_))
    ));
    assert!(calc.inputs().n_plus_one);
}

#[test]
fn parse_toggle_accepts_common_spellings() {
    for yes in ["true", "1", "ON", " yes "] {
        assert_eq!(app::parse_toggle(yes), Some(true), "{yes}");
    }
    for no in ["false", "0", "Off", "no"] {
        assert_eq!(app::parse_toggle(no), Some(false), "{no}");
    }
    assert_eq!(app::parse_toggle("2"), None);
}
