//! 번역 조회와 언어 결정 테스트.
use water_treatment_calculator::fields::Field;
use water_treatment_calculator::i18n::{
    fill_template, keys, parse_toml_to_map, resolve_language, Language, Translator,
};
use water_treatment_calculator::inputs::PlantInputs;
use water_treatment_calculator::sizing;

#[test]
fn unknown_language_falls_back_to_russian() {
    let tr = Translator::new("de");
    assert_eq!(tr.language(), Language::Ru);
    assert_eq!(tr.t(keys::RESET_DONE), "Все параметры сброшены к значениям по умолчанию.");
}

#[test]
fn missing_key_returns_key_itself() {
    let tr = Translator::new("en");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
}

#[test]
fn every_field_and_capex_item_has_a_label() {
    let results = sizing::compute(&PlantInputs::default());
    for lang in Language::ALL {
        let tr = Translator::new(lang.as_code());
        for field in Field::ALL {
            let key = field.label_key();
            assert_ne!(tr.t(&key), key, "{} {}", lang.as_code(), key);
        }
        for line in &results.capex.lines {
            let key = line.item.label_key();
            assert_ne!(tr.t(key), key, "{}", lang.as_code());
        }
        assert_ne!(tr.t(keys::N_PLUS_ONE_LABEL), keys::N_PLUS_ONE_LABEL);
    }
}

#[test]
fn templates_are_filled() {
    let tr = Translator::new("en");
    let text = tr.tf(keys::OPEX_YEAR, &[("year", "3".to_string())]);
    assert!(text.contains('3'), "{text}");
    assert!(!text.contains("{year}"), "{text}");
    assert_eq!(
        fill_template("{a} + {a} = {b}", &[("a", "1".into()), ("b", "2".into())]),
        "1 + 1 = 2"
    );
}

#[test]
fn explicit_language_wins_over_config() {
    assert_eq!(resolve_language(Some("en"), Some("ko")), "en");
    assert_eq!(resolve_language(Some("auto"), Some("ko-KR")), "ko");
    assert_eq!(resolve_language(Some("RU"), None), "ru");
}

#[test]
fn language_pack_is_flattened() {
    let src = r#"
        [cli]
        reset_done = "Defaults restored"
        [section]
        results = "Outcome"
        ignored = 3
    "#;
    let map = parse_toml_to_map(src).expect("valid toml");
    assert_eq!(map.get("cli.reset_done").map(String::as_str), Some("Defaults restored"));
    assert_eq!(map.get("section.results").map(String::as_str), Some("Outcome"));
    assert!(!map.contains_key("section.ignored"));
    assert!(parse_toml_to_map("= broken").is_none());
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = std::env::temp_dir().join(format!("wtc_locales_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(dir.join("en.toml"), "[cli]\nreset_done = \"Back to factory\"\n")
        .expect("write pack");

    let tr = Translator::new_with_pack("en", Some(dir.as_path()));
    assert_eq!(tr.t(keys::RESET_DONE), "Back to factory");
    assert_eq!(tr.t(keys::STATE_ON), "on");

    let _ = std::fs::remove_dir_all(&dir);
}
