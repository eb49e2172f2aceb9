use std::io::{BufRead, Write};

use crate::config::ConfigError;
use crate::fields::Field;
use crate::i18n::{keys, Translator};
use crate::persistence::KEY_N_PLUS_ONE;
use crate::session::Calculator;
use crate::store::SettingsStore;
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 콘솔/파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 존재하지 않는 필드 키
    #[error("알 수 없는 항목: {0}")]
    UnknownField(String),
    /// N+1 값이 참/거짓으로 읽히지 않음
    #[error("N+1 값은 true/false 중 하나여야 합니다: {0}")]
    InvalidToggle(String),
    /// 보고서 직렬화 오류
    #[error("보고서 직렬화 오류: {0}")]
    Report(#[from] serde_json::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run<S, R, W>(
    calc: &mut Calculator<S>,
    tr: &Translator,
    console: &mut Console<R, W>,
) -> Result<(), AppError>
where
    S: SettingsStore,
    R: BufRead,
    W: Write,
{
    let advanced: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| !Field::QUICK.contains(f))
        .collect();
    loop {
        match ui_cli::main_menu(tr, console)? {
            MenuChoice::ShowResults => ui_cli::handle_show(tr, console, calc)?,
            MenuChoice::QuickParameters => {
                ui_cli::handle_fields(tr, console, calc, &Field::QUICK)?;
                ui_cli::handle_show(tr, console, calc)?;
            }
            MenuChoice::AdvancedParameters => {
                ui_cli::handle_fields(tr, console, calc, &advanced)?;
                ui_cli::handle_show(tr, console, calc)?;
            }
            MenuChoice::ToggleNPlusOne => ui_cli::handle_toggle(tr, console, calc)?,
            MenuChoice::Reset => {
                calc.reset();
                console.println(&tr.t(keys::RESET_DONE))?;
            }
            MenuChoice::Exit => {
                console.println(&tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}

/// `true/false`, `1/0`, `on/off`, `yes/no`를 읽는다.
pub fn parse_toggle(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// 키로 지정한 입력 하나를 바꾸고, 실제로 기록된 값을 문자열로 돌려준다.
///
/// `nplus1`은 참/거짓, 그 외 키는 수치 필드로 처리한다. 수치는 범위로 강제된다.
pub fn set_by_key<S: SettingsStore>(
    calc: &mut Calculator<S>,
    key: &str,
    value: &str,
) -> Result<String, AppError> {
    if key.trim().eq_ignore_ascii_case(KEY_N_PLUS_ONE) {
        let enabled = parse_toggle(value).ok_or_else(|| AppError::InvalidToggle(value.into()))?;
        calc.set_n_plus_one(enabled);
        return Ok(enabled.to_string());
    }
    let field = Field::from_key(key).ok_or_else(|| AppError::UnknownField(key.into()))?;
    Ok(calc.set_text(field, value).to_string())
}
