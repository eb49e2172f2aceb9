//! 텍스트/JSON 보고서 테스트.
use water_treatment_calculator::i18n::Translator;
use water_treatment_calculator::inputs::PlantInputs;
use water_treatment_calculator::report::{render_json, render_text};
use water_treatment_calculator::sizing;

#[test]
fn russian_report_lists_results_and_costs() {
    let results = sizing::compute(&PlantInputs::default());
    let text = render_text(&results, &Translator::new("ru"));
    assert!(text.contains("Население, чел: 1\u{a0}425"), "{text}");
    assert!(text.contains("27.04"), "{text}");
    assert!(text.contains(": 27\u{a0}039\n"), "{text}");
    assert!(text.contains("TCO 5 лет, ₽"), "{text}");
    assert!(text.contains("\u{a0}₽"), "{text}");
}

#[test]
fn english_report_uses_english_labels() {
    let results = sizing::compute(&PlantInputs::default());
    let text = render_text(&results, &Translator::new("en"));
    assert!(text.contains("Population, people: 1,425"), "{text}");
    assert!(text.contains("TCO 5 years, RUB: RUB\u{a0}"), "{text}");
    assert!(!text.contains("Население"), "{text}");
}

#[test]
fn report_has_one_row_per_capex_line_and_year() {
    let results = sizing::compute(&PlantInputs::default());
    let text = render_text(&results, &Translator::new("en"));
    let capex_rows = text.lines().filter(|l| l.contains(" × ")).count();
    assert_eq!(capex_rows, results.capex.lines.len());
    for year in 1..=5 {
        assert!(text.contains(&year.to_string()), "{text}");
    }
}

#[test]
fn json_report_carries_every_section() {
    let results = sizing::compute(&PlantInputs::default());
    let json = render_json(&results).expect("serialize");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(v["equipment"]["nf_modules"], 28);
    assert_eq!(v["capex"]["lines"].as_array().map(Vec::len), Some(13));
    assert_eq!(v["opex"]["years"].as_array().map(Vec::len), Some(5));
    let tco = v["tco"].as_f64().expect("tco number");
    assert!((tco - results.tco).abs() <= 1e-6 * results.tco.abs());
}
