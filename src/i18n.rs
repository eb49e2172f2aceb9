use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const FOOTER: &str = "general.footer";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SHOW: &str = "main_menu.show";
    pub const MAIN_MENU_QUICK: &str = "main_menu.quick";
    pub const MAIN_MENU_ADVANCED: &str = "main_menu.advanced";
    pub const MAIN_MENU_TOGGLE_N_PLUS_ONE: &str = "main_menu.toggle_n_plus_one";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_FIELD_SELECT: &str = "prompt.field_select";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FIELD_UPDATED: &str = "cli.field_updated";
    pub const N_PLUS_ONE_STATE: &str = "cli.n_plus_one_state";
    pub const STATE_ON: &str = "cli.state_on";
    pub const STATE_OFF: &str = "cli.state_off";
    pub const RESET_DONE: &str = "cli.reset_done";

    pub const SECTION_QUICK: &str = "section.quick";
    pub const SECTION_QUICK_HINT: &str = "section.quick_hint";
    pub const SECTION_RESULTS: &str = "section.results";
    pub const SECTION_EQUIPMENT: &str = "section.equipment";
    pub const SECTION_COSTS: &str = "section.costs";
    pub const SECTION_ADVANCED: &str = "section.advanced";
    pub const SECTION_PRICES: &str = "section.prices";
    pub const SECTION_QUANTITIES: &str = "section.quantities";
    pub const SECTION_OPEX_INPUTS: &str = "section.opex_inputs";
    pub const SECTION_CAPEX_BREAKDOWN: &str = "section.capex_breakdown";
    pub const SECTION_OPEX_YEARS: &str = "section.opex_years";

    pub const RESULT_POPULATION: &str = "result.population";
    pub const RESULT_DAILY_M3: &str = "result.daily_m3";
    pub const RESULT_AVG_HOURLY: &str = "result.avg_hourly";
    pub const RESULT_PEAK_HOURLY: &str = "result.peak_hourly";
    pub const RESULT_REQUIRED_M3H: &str = "result.required_m3h";
    pub const RESULT_REQUIRED_LH: &str = "result.required_lh";

    pub const EQUIP_NF: &str = "equipment.nf";
    pub const EQUIP_UF: &str = "equipment.uf";
    pub const EQUIP_UV: &str = "equipment.uv";
    pub const EQUIP_PUMPS: &str = "equipment.pumps";
    pub const EQUIP_CARBON: &str = "equipment.carbon";

    pub const COST_CAPEX: &str = "cost.capex";
    pub const COST_OPEX_5Y: &str = "cost.opex_5y";
    pub const COST_TCO: &str = "cost.tco";

    pub const OPEX_ANNUAL_M3: &str = "opex.annual_m3";
    pub const OPEX_YEAR: &str = "opex.year";
    pub const OPEX_ENERGY: &str = "opex.energy";
    pub const OPEX_REAGENTS: &str = "opex.reagents";
    pub const OPEX_MEMBRANES: &str = "opex.membranes";
    pub const OPEX_SERVICE: &str = "opex.service";
    pub const OPEX_TOTAL: &str = "opex.total";

    pub const N_PLUS_ONE_LABEL: &str = "field.nplus1";

    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_EXPORT: &str = "gui.export";
    pub const GUI_EXPORT_DONE: &str = "gui.export_done";
    pub const GUI_EXPORT_FAILED: &str = "gui.export_failed";
    pub const GUI_RESET: &str = "gui.reset";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
    Ko,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Ko];

    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::Ru
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    /// 언어 선택 UI에 표시할 자기 언어 이름.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
            Language::Ko => "한국어",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ru/en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 ru로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 러시아어 → 키 자체 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ru => ru(key),
            Language::En => en(key).or_else(|| ru(key)),
            Language::Ko => ko(key).or_else(|| ru(key)),
        };
        builtin.map_or_else(|| key.to_string(), str::to_string)
    }

    /// 번역 문자열의 `{name}` 자리를 채운다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// `{name}` 형식의 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ru".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ru") => Some("ru".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" | "en" | "ko" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 언어팩 TOML을 `a.b.c` 형태의 평면 맵으로 바꾼다. 문자열이 아닌 값은 무시한다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ru(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Калькулятор водоочистки",
        APP_EXIT => "Работа завершена.",
        FOOTER => "v1 • офлайн",
        MAIN_MENU_TITLE => "\n=== Калькулятор водоочистки ===",
        MAIN_MENU_SHOW => "1) Результаты",
        MAIN_MENU_QUICK => "2) Быстрый расчёт (3 параметра)",
        MAIN_MENU_ADVANCED => "3) Расширенные настройки",
        MAIN_MENU_TOGGLE_N_PLUS_ONE => "4) Переключить резервирование N+1",
        MAIN_MENU_RESET => "5) Сбросить к значениям по умолчанию",
        MAIN_MENU_EXIT => "0) Выход",
        PROMPT_MENU_SELECT => "Выберите пункт: ",
        PROMPT_FIELD_SELECT => "Номер параметра (Enter – назад): ",
        PROMPT_VALUE => "Новое значение: ",
        INVALID_SELECTION_RETRY => "Неверный ввод. Повторите.",
        FIELD_UPDATED => "Сохранено: {label} = {value}",
        N_PLUS_ONE_STATE => "Резервирование N+1: {state}",
        STATE_ON => "вкл",
        STATE_OFF => "выкл",
        RESET_DONE => "Все параметры сброшены к значениям по умолчанию.",
        SECTION_QUICK => "Быстрый расчёт (3 параметра)",
        SECTION_QUICK_HINT => "Остальные параметры – в «Расширенных».",
        SECTION_RESULTS => "Результаты",
        SECTION_EQUIPMENT => "Подбор оборудования (шт)",
        SECTION_COSTS => "Стоимость",
        SECTION_ADVANCED => "Расширенные настройки",
        SECTION_PRICES => "Цены и доп. параметры",
        SECTION_QUANTITIES => "Объёмы",
        SECTION_OPEX_INPUTS => "Эксплуатационные расходы",
        SECTION_CAPEX_BREAKDOWN => "Структура CAPEX",
        SECTION_OPEX_YEARS => "OPEX по годам",
        RESULT_POPULATION => "Население, чел",
        RESULT_DAILY_M3 => "Суточный объём, м³/сут",
        RESULT_AVG_HOURLY => "Средний часовой расход, м³/ч",
        RESULT_PEAK_HOURLY => "Пиковый часовой расход, м³/ч",
        RESULT_REQUIRED_M3H => "Требуемая мощность, м³/ч",
        RESULT_REQUIRED_LH => "Требуемая мощность, л/ч",
        EQUIP_NF => "NF‑модули",
        EQUIP_UF => "UF‑блоки",
        EQUIP_UV => "УФ‑установки",
        EQUIP_PUMPS => "Насосы",
        EQUIP_CARBON => "Колонны с актив. углём",
        COST_CAPEX => "CAPEX, ₽",
        COST_OPEX_5Y => "OPEX 5 лет, ₽",
        COST_TCO => "TCO 5 лет, ₽",
        OPEX_ANNUAL_M3 => "Годовой объём, м³",
        OPEX_YEAR => "Год {year}",
        OPEX_ENERGY => "Энергия",
        OPEX_REAGENTS => "Реагенты/СИП",
        OPEX_MEMBRANES => "Мембраны",
        OPEX_SERVICE => "Сервис",
        OPEX_TOTAL => "Итого",
        N_PLUS_ONE_LABEL => "Резервирование N+1",
        GUI_LANGUAGE => "Язык",
        GUI_EXPORT => "Сохранить отчёт…",
        GUI_EXPORT_DONE => "Отчёт сохранён: {path}",
        GUI_EXPORT_FAILED => "Не удалось сохранить отчёт: {error}",
        GUI_RESET => "Сбросить",
        "field.apts" => "Квартиры, шт",
        "field.pplPerApt" => "Людей на квартиру, чел",
        "field.lpd" => "Потребление на человека, л/сут",
        "field.occ" => "Коэффициент заселения",
        "field.kh" => "Пиковый коэф. часа (Kh)",
        "field.ks" => "Страховой коэф. (Ks)",
        "field.nfmod" => "Тип НФ‑модуля, м³/ч",
        "field.prices.nf" => "NF‑модуль, ₽/шт",
        "field.prices.uf" => "UF‑блок, ₽/шт",
        "field.prices.uv" => "УФ‑установка, ₽/шт",
        "field.prices.pump" => "Насос, ₽/шт",
        "field.prices.carbon" => "Угольная колонна, ₽/шт",
        "field.prices.mineral" => "Минерализатор, ₽",
        "field.prices.tank5m3" => "Ёмкость 5 м³, ₽/шт",
        "field.prices.inoxPerM" => "Нерж. труба, ₽/м",
        "field.prices.pexPerM" => "PEX‑a труба, ₽/м",
        "field.prices.plc" => "ПЛК, ₽",
        "field.prices.install" => "Монтаж, ₽",
        "field.prices.roomPerM2" => "Отделка помещения, ₽/м²",
        "field.prices.design" => "Проектирование, ₽",
        "field.defs.tanks" => "Ёмкости, шт",
        "field.defs.inoxM" => "Нерж. труба, м",
        "field.defs.pexM" => "PEX‑a труба, м",
        "field.defs.roomM2" => "Площадь помещения, м²",
        "field.opex.loadFactor" => "Коэф. загрузки",
        "field.opex.inflation" => "Инфляция, %/год",
        "field.opex.energyRurPerM3" => "Энергия, ₽/м³",
        "field.opex.reagentsRurPerM3" => "Реагенты/СИП, ₽/м³",
        "field.opex.nfMembranePrice" => "Цена мембраны NF, ₽/шт",
        "field.opex.nfMembraneFrac" => "Доля замены мембран/год",
        "field.opex.serviceY1" => "Сервис (фикс.) 1-й год, ₽",
        "capex.nf_modules" => "NF‑модули",
        "capex.uf_blocks" => "UF‑блоки",
        "capex.uv_units" => "УФ‑установки",
        "capex.pumps" => "Насосы",
        "capex.carbon_columns" => "Угольные колонны",
        "capex.mineralizer" => "Минерализатор",
        "capex.storage_tanks" => "Ёмкости",
        "capex.stainless_pipe" => "Нерж. труба",
        "capex.pex_pipe" => "PEX‑a труба",
        "capex.plc" => "ПЛК",
        "capex.installation" => "Монтаж",
        "capex.room_fit_out" => "Отделка помещения",
        "capex.design" => "Проектирование",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Water Treatment Calculator",
        APP_EXIT => "Exiting application.",
        FOOTER => "v1 • offline",
        MAIN_MENU_TITLE => "\n=== Water Treatment Calculator ===",
        MAIN_MENU_SHOW => "1) Results",
        MAIN_MENU_QUICK => "2) Quick calculation (3 parameters)",
        MAIN_MENU_ADVANCED => "3) Advanced settings",
        MAIN_MENU_TOGGLE_N_PLUS_ONE => "4) Toggle N+1 redundancy",
        MAIN_MENU_RESET => "5) Reset to defaults",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_FIELD_SELECT => "Parameter number (Enter to go back): ",
        PROMPT_VALUE => "New value: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        FIELD_UPDATED => "Saved: {label} = {value}",
        N_PLUS_ONE_STATE => "N+1 redundancy: {state}",
        STATE_ON => "on",
        STATE_OFF => "off",
        RESET_DONE => "All parameters were reset to defaults.",
        SECTION_QUICK => "Quick calculation (3 parameters)",
        SECTION_QUICK_HINT => "Other parameters are under \"Advanced\".",
        SECTION_RESULTS => "Results",
        SECTION_EQUIPMENT => "Equipment selection (pcs)",
        SECTION_COSTS => "Cost",
        SECTION_ADVANCED => "Advanced settings",
        SECTION_PRICES => "Prices and extra parameters",
        SECTION_QUANTITIES => "Quantities",
        SECTION_OPEX_INPUTS => "Operating costs",
        SECTION_CAPEX_BREAKDOWN => "CAPEX breakdown",
        SECTION_OPEX_YEARS => "OPEX by year",
        RESULT_POPULATION => "Population, people",
        RESULT_DAILY_M3 => "Daily volume, m³/day",
        RESULT_AVG_HOURLY => "Average hourly flow, m³/h",
        RESULT_PEAK_HOURLY => "Peak hourly flow, m³/h",
        RESULT_REQUIRED_M3H => "Required capacity, m³/h",
        RESULT_REQUIRED_LH => "Required capacity, L/h",
        EQUIP_NF => "NF modules",
        EQUIP_UF => "UF blocks",
        EQUIP_UV => "UV units",
        EQUIP_PUMPS => "Pumps",
        EQUIP_CARBON => "Activated carbon columns",
        COST_CAPEX => "CAPEX, RUB",
        COST_OPEX_5Y => "OPEX 5 years, RUB",
        COST_TCO => "TCO 5 years, RUB",
        OPEX_ANNUAL_M3 => "Annual volume, m³",
        OPEX_YEAR => "Year {year}",
        OPEX_ENERGY => "Energy",
        OPEX_REAGENTS => "Reagents/CIP",
        OPEX_MEMBRANES => "Membranes",
        OPEX_SERVICE => "Service",
        OPEX_TOTAL => "Total",
        N_PLUS_ONE_LABEL => "N+1 redundancy",
        GUI_LANGUAGE => "Language",
        GUI_EXPORT => "Save report…",
        GUI_EXPORT_DONE => "Report saved: {path}",
        GUI_EXPORT_FAILED => "Could not save report: {error}",
        GUI_RESET => "Reset",
        "field.apts" => "Apartments, pcs",
        "field.pplPerApt" => "People per apartment",
        "field.lpd" => "Consumption per person, L/day",
        "field.occ" => "Occupancy factor",
        "field.kh" => "Peak hour factor (Kh)",
        "field.ks" => "Safety factor (Ks)",
        "field.nfmod" => "NF module size, m³/h",
        "field.prices.nf" => "NF module, RUB/pc",
        "field.prices.uf" => "UF block, RUB/pc",
        "field.prices.uv" => "UV unit, RUB/pc",
        "field.prices.pump" => "Pump, RUB/pc",
        "field.prices.carbon" => "Carbon column, RUB/pc",
        "field.prices.mineral" => "Mineralizer, RUB",
        "field.prices.tank5m3" => "5 m³ tank, RUB/pc",
        "field.prices.inoxPerM" => "Stainless pipe, RUB/m",
        "field.prices.pexPerM" => "PEX-a pipe, RUB/m",
        "field.prices.plc" => "PLC, RUB",
        "field.prices.install" => "Installation, RUB",
        "field.prices.roomPerM2" => "Room fit-out, RUB/m²",
        "field.prices.design" => "Design, RUB",
        "field.defs.tanks" => "Tanks, pcs",
        "field.defs.inoxM" => "Stainless pipe, m",
        "field.defs.pexM" => "PEX-a pipe, m",
        "field.defs.roomM2" => "Room area, m²",
        "field.opex.loadFactor" => "Load factor",
        "field.opex.inflation" => "Inflation, %/year",
        "field.opex.energyRurPerM3" => "Energy, RUB/m³",
        "field.opex.reagentsRurPerM3" => "Reagents/CIP, RUB/m³",
        "field.opex.nfMembranePrice" => "NF membrane price, RUB/pc",
        "field.opex.nfMembraneFrac" => "Membrane replacement share/year",
        "field.opex.serviceY1" => "Service (fixed), year 1, RUB",
        "capex.nf_modules" => "NF modules",
        "capex.uf_blocks" => "UF blocks",
        "capex.uv_units" => "UV units",
        "capex.pumps" => "Pumps",
        "capex.carbon_columns" => "Carbon columns",
        "capex.mineralizer" => "Mineralizer",
        "capex.storage_tanks" => "Storage tanks",
        "capex.stainless_pipe" => "Stainless pipe",
        "capex.pex_pipe" => "PEX-a pipe",
        "capex.plc" => "PLC",
        "capex.installation" => "Installation",
        "capex.room_fit_out" => "Room fit-out",
        "capex.design" => "Design",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "정수 설비 계산기",
        APP_EXIT => "프로그램을 종료합니다.",
        FOOTER => "v1 • 오프라인",
        MAIN_MENU_TITLE => "\n=== 정수 설비 계산기 ===",
        MAIN_MENU_SHOW => "1) 계산 결과",
        MAIN_MENU_QUICK => "2) 빠른 계산 (3개 항목)",
        MAIN_MENU_ADVANCED => "3) 상세 설정",
        MAIN_MENU_TOGGLE_N_PLUS_ONE => "4) N+1 예비 전환",
        MAIN_MENU_RESET => "5) 기본값으로 초기화",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_FIELD_SELECT => "항목 번호 (엔터: 뒤로): ",
        PROMPT_VALUE => "새 값: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        FIELD_UPDATED => "저장됨: {label} = {value}",
        N_PLUS_ONE_STATE => "N+1 예비: {state}",
        STATE_ON => "켜짐",
        STATE_OFF => "꺼짐",
        RESET_DONE => "모든 항목을 기본값으로 되돌렸습니다.",
        SECTION_QUICK => "빠른 계산 (3개 항목)",
        SECTION_QUICK_HINT => "나머지 항목은 「상세 설정」에 있습니다.",
        SECTION_RESULTS => "계산 결과",
        SECTION_EQUIPMENT => "설비 선정 (대)",
        SECTION_COSTS => "비용",
        SECTION_ADVANCED => "상세 설정",
        SECTION_PRICES => "단가 및 추가 항목",
        SECTION_QUANTITIES => "물량",
        SECTION_OPEX_INPUTS => "운영비",
        SECTION_CAPEX_BREAKDOWN => "CAPEX 내역",
        SECTION_OPEX_YEARS => "연차별 OPEX",
        RESULT_POPULATION => "급수 인구, 명",
        RESULT_DAILY_M3 => "일 사용량, m³/일",
        RESULT_AVG_HOURLY => "평균 시간 유량, m³/h",
        RESULT_PEAK_HOURLY => "최대 시간 유량, m³/h",
        RESULT_REQUIRED_M3H => "설계 용량, m³/h",
        RESULT_REQUIRED_LH => "설계 용량, L/h",
        EQUIP_NF => "NF 모듈",
        EQUIP_UF => "UF 블록",
        EQUIP_UV => "UV 살균기",
        EQUIP_PUMPS => "펌프",
        EQUIP_CARBON => "활성탄 컬럼",
        COST_CAPEX => "CAPEX, RUB",
        COST_OPEX_5Y => "5년 OPEX, RUB",
        COST_TCO => "5년 TCO, RUB",
        OPEX_ANNUAL_M3 => "연간 처리량, m³",
        OPEX_YEAR => "{year}년차",
        OPEX_ENERGY => "전력",
        OPEX_REAGENTS => "약품/CIP",
        OPEX_MEMBRANES => "멤브레인",
        OPEX_SERVICE => "서비스",
        OPEX_TOTAL => "합계",
        N_PLUS_ONE_LABEL => "N+1 예비",
        GUI_LANGUAGE => "언어",
        GUI_EXPORT => "보고서 저장…",
        GUI_EXPORT_DONE => "보고서를 저장했습니다: {path}",
        GUI_EXPORT_FAILED => "보고서를 저장하지 못했습니다: {error}",
        GUI_RESET => "초기화",
        "field.apts" => "세대 수, 세대",
        "field.pplPerApt" => "세대당 인원, 명",
        "field.lpd" => "1인당 사용량, L/일",
        "field.occ" => "입주율",
        "field.kh" => "시간 최대 계수 (Kh)",
        "field.ks" => "안전 계수 (Ks)",
        "field.nfmod" => "NF 모듈 용량, m³/h",
        "field.prices.nf" => "NF 모듈, RUB/개",
        "field.prices.uf" => "UF 블록, RUB/개",
        "field.prices.uv" => "UV 살균기, RUB/대",
        "field.prices.pump" => "펌프, RUB/대",
        "field.prices.carbon" => "활성탄 컬럼, RUB/개",
        "field.prices.mineral" => "미네랄라이저, RUB",
        "field.prices.tank5m3" => "5 m³ 탱크, RUB/개",
        "field.prices.inoxPerM" => "스테인리스 배관, RUB/m",
        "field.prices.pexPerM" => "PEX-a 배관, RUB/m",
        "field.prices.plc" => "PLC, RUB",
        "field.prices.install" => "설치 공사, RUB",
        "field.prices.roomPerM2" => "기계실 마감, RUB/m²",
        "field.prices.design" => "설계비, RUB",
        "field.defs.tanks" => "탱크, 개",
        "field.defs.inoxM" => "스테인리스 배관, m",
        "field.defs.pexM" => "PEX-a 배관, m",
        "field.defs.roomM2" => "기계실 면적, m²",
        "field.opex.loadFactor" => "부하율",
        "field.opex.inflation" => "물가상승률, %/년",
        "field.opex.energyRurPerM3" => "전력비, RUB/m³",
        "field.opex.reagentsRurPerM3" => "약품/CIP, RUB/m³",
        "field.opex.nfMembranePrice" => "NF 멤브레인 단가, RUB/개",
        "field.opex.nfMembraneFrac" => "연간 멤브레인 교체 비율",
        "field.opex.serviceY1" => "1년차 고정 서비스, RUB",
        "capex.nf_modules" => "NF 모듈",
        "capex.uf_blocks" => "UF 블록",
        "capex.uv_units" => "UV 살균기",
        "capex.pumps" => "펌프",
        "capex.carbon_columns" => "활성탄 컬럼",
        "capex.mineralizer" => "미네랄라이저",
        "capex.storage_tanks" => "저장 탱크",
        "capex.stainless_pipe" => "스테인리스 배관",
        "capex.pex_pipe" => "PEX-a 배관",
        "capex.plc" => "PLC",
        "capex.installation" => "설치 공사",
        "capex.room_fit_out" => "기계실 마감",
        "capex.design" => "설계비",
        _ => return None,
    })
}
