use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::fields::Field;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::session::Calculator;
use crate::store::SettingsStore;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowResults,
    QuickParameters,
    AdvancedParameters,
    ToggleNPlusOne,
    Reset,
    Exit,
}

/// 대화형 메뉴의 입출력. 표준 입출력 대신 메모리 버퍼도 받을 수 있다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_SHOW,
        keys::MAIN_MENU_QUICK,
        keys::MAIN_MENU_ADVANCED,
        keys::MAIN_MENU_TOGGLE_N_PLUS_ONE,
        keys::MAIN_MENU_RESET,
        keys::MAIN_MENU_EXIT,
    ] {
        console.println(&tr.t(key))?;
    }
    loop {
        let Some(sel) = console.read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::ShowResults),
            "2" => return Ok(MenuChoice::QuickParameters),
            "3" => return Ok(MenuChoice::AdvancedParameters),
            "4" => return Ok(MenuChoice::ToggleNPlusOne),
            "5" => return Ok(MenuChoice::Reset),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.println(&tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 현재 결과 보고서를 출력한다.
pub fn handle_show<S: SettingsStore, R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    calc: &Calculator<S>,
) -> Result<(), AppError> {
    console.println(&report::render_text(calc.results(), tr))
}

/// 번호가 매겨진 필드 목록을 보여주고, 빈 입력이 올 때까지 값을 편집한다.
pub fn handle_fields<S: SettingsStore, R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    calc: &mut Calculator<S>,
    fields: &[Field],
) -> Result<(), AppError> {
    print_field_list(tr, console, calc, fields)?;
    loop {
        let Some(sel) = console.read_line(&tr.t(keys::PROMPT_FIELD_SELECT))? else {
            return Ok(());
        };
        if sel.is_empty() {
            return Ok(());
        }
        let field = match sel.parse::<usize>() {
            Ok(n) if (1..=fields.len()).contains(&n) => fields[n - 1],
            _ => {
                console.println(&tr.t(keys::INVALID_SELECTION_RETRY))?;
                continue;
            }
        };
        let Some(text) = console.read_line(&tr.t(keys::PROMPT_VALUE))? else {
            return Ok(());
        };
        let stored = calc.set_text(field, &text);
        console.println(&tr.tf(
            keys::FIELD_UPDATED,
            &[("label", tr.t(&field.label_key())), ("value", stored.to_string())],
        ))?;
    }
}

fn print_field_list<S: SettingsStore, R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    calc: &Calculator<S>,
    fields: &[Field],
) -> Result<(), AppError> {
    for (i, field) in fields.iter().enumerate() {
        let b = field.bounds();
        console.println(&format!(
            "{:>2}) {} = {} [{} … {}]",
            i + 1,
            tr.t(&field.label_key()),
            field.get(calc.inputs()),
            b.min,
            b.max
        ))?;
    }
    Ok(())
}

/// N+1 예비 적용 여부를 뒤집는다.
pub fn handle_toggle<S: SettingsStore, R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    calc: &mut Calculator<S>,
) -> Result<(), AppError> {
    let enabled = !calc.inputs().n_plus_one;
    calc.set_n_plus_one(enabled);
    console.println(&n_plus_one_message(tr, enabled))
}

pub fn n_plus_one_message(tr: &Translator, enabled: bool) -> String {
    let state = if enabled {
        tr.t(keys::STATE_ON)
    } else {
        tr.t(keys::STATE_OFF)
    };
    tr.tf(keys::N_PLUS_ONE_STATE, &[("state", state)])
}
