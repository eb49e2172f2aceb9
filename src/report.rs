//! 계산 결과를 텍스트 보고서 또는 JSON으로 출력한다.

use std::fmt::Write as _;

use crate::format::{format_currency, format_fixed, format_int};
use crate::i18n::{keys, Translator};
use crate::sizing::SizingResults;

/// 화면/파일용 텍스트 보고서를 만든다.
pub fn render_text(results: &SizingResults, tr: &Translator) -> String {
    let lang = tr.language();
    let int = |v: f64| format_int(v, lang);
    let money = |v: f64| format_currency(v, lang);
    let mut out = String::new();

    let d = &results.demand;
    section(&mut out, &tr.t(keys::SECTION_RESULTS));
    row(&mut out, &tr.t(keys::RESULT_POPULATION), int(d.population));
    row(&mut out, &tr.t(keys::RESULT_DAILY_M3), format_fixed(d.daily_m3, 2));
    row(&mut out, &tr.t(keys::RESULT_AVG_HOURLY), format_fixed(d.avg_hourly_m3, 2));
    row(&mut out, &tr.t(keys::RESULT_PEAK_HOURLY), format_fixed(d.peak_hourly_m3, 2));
    row(&mut out, &tr.t(keys::RESULT_REQUIRED_M3H), format_fixed(d.required_m3_per_h, 2));
    row(&mut out, &tr.t(keys::RESULT_REQUIRED_LH), int(d.required_l_per_h));

    let e = &results.equipment;
    section(&mut out, &tr.t(keys::SECTION_EQUIPMENT));
    row(&mut out, &tr.t(keys::EQUIP_NF), int(e.nf_modules as f64));
    row(&mut out, &tr.t(keys::EQUIP_UF), int(e.uf_blocks as f64));
    row(&mut out, &tr.t(keys::EQUIP_UV), int(e.uv_units as f64));
    row(&mut out, &tr.t(keys::EQUIP_PUMPS), int(e.pumps as f64));
    row(&mut out, &tr.t(keys::EQUIP_CARBON), int(e.carbon_columns as f64));

    section(&mut out, &tr.t(keys::SECTION_COSTS));
    row(&mut out, &tr.t(keys::COST_CAPEX), money(results.capex.total));
    row(&mut out, &tr.t(keys::COST_OPEX_5Y), money(results.opex.total));
    row(&mut out, &tr.t(keys::COST_TCO), money(results.tco));

    section(&mut out, &tr.t(keys::SECTION_CAPEX_BREAKDOWN));
    for line in &results.capex.lines {
        let detail = format!(
            "{} × {} = {}",
            int(line.quantity),
            money(line.unit_price),
            money(line.cost)
        );
        row(&mut out, &tr.t(line.item.label_key()), detail);
    }

    section(&mut out, &tr.t(keys::SECTION_OPEX_YEARS));
    row(&mut out, &tr.t(keys::OPEX_ANNUAL_M3), int(results.opex.annual_m3));
    for year in &results.opex.years {
        let label = tr.tf(keys::OPEX_YEAR, &[("year", year.year.to_string())]);
        let detail = format!(
            "{} ({}: {}, {}: {}, {}: {}, {}: {})",
            money(year.total),
            tr.t(keys::OPEX_ENERGY),
            money(year.energy),
            tr.t(keys::OPEX_REAGENTS),
            money(year.reagents),
            tr.t(keys::OPEX_MEMBRANES),
            money(year.membranes),
            tr.t(keys::OPEX_SERVICE),
            money(year.service),
        );
        row(&mut out, &label, detail);
    }
    row(&mut out, &tr.t(keys::OPEX_TOTAL), money(results.opex.total));

    out
}

/// 결과 전체를 보기 좋게 들여쓴 JSON으로 직렬화한다.
pub fn render_json(results: &SizingResults) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n-- {title} --");
}

fn row(out: &mut String, label: &str, value: String) {
    let _ = writeln!(out, "{label}: {value}");
}
