//! 결과 표시용 숫자 서식.
//!
//! 러시아어는 그룹 구분자로 줄바꿈 없는 공백(U+00A0)을 쓰고 네 자리 수는
//! 묶지 않는다(`1234`, `12 345`). 영어·한국어는 쉼표로 세 자리마다 묶는다.

use crate::i18n::Language;

const NBSP: char = '\u{a0}';

/// 반올림(.5는 올림). 비유한 값은 0으로 본다.
fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let r = value.round();
    // f64::round는 .5를 0에서 먼 쪽으로 보내므로 음수의 .5만 되돌린다
    if value < 0.0 && r - value == -0.5 {
        r + 1.0
    } else {
        r
    }
}

fn group_digits(digits: &str, separator: char, min_grouping: usize) -> String {
    if digits.len() < 3 + min_grouping {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let head = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn grouped_integer(value: f64, lang: Language) -> String {
    let rounded = round_half_up(value);
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let body = match lang {
        Language::Ru => group_digits(&digits, NBSP, 2),
        Language::En | Language::Ko => group_digits(&digits, ',', 1),
    };
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// 정수로 반올림한 뒤 언어별 자릿수 구분을 적용한다.
pub fn format_int(value: f64, lang: Language) -> String {
    grouped_integer(value, lang)
}

/// 루블 금액. 소수점 이하는 반올림한다.
pub fn format_currency(value: f64, lang: Language) -> String {
    let amount = grouped_integer(value, lang);
    match lang {
        Language::Ru => format!("{amount}{NBSP}₽"),
        Language::En | Language::Ko => format!("RUB{NBSP}{amount}"),
    }
}

/// 고정 소수점 표기. 비유한 값은 0으로 본다.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    format!("{v:.decimals$}")
}
