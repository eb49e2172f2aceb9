use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use water_treatment_calculator::{
    app, config,
    fields::Field,
    i18n::{self, Translator},
    logging, report,
    session::Calculator,
    store::JsonFileStore,
    ui_cli::{self, Console},
};

/// 정수 설비 용량·비용 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(name = "water_treatment_calculator_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 입력값 저장소(JSON) 경로. 설정 파일의 store_path보다 우선한다.
    #[arg(long)]
    store: Option<PathBuf>,
    /// 표시 언어 (auto/ru/en/ko)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 현재 입력값으로 계산한 결과를 출력한다
    Show {
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 입력값 하나를 바꾸고 저장한다 (예: set apts 320, set prices.nf 190000, set nplus1 false)
    Set { key: String, value: String },
    /// 편집 가능한 키 목록과 현재 값, 허용 범위를 출력한다
    Fields,
    /// 모든 입력값을 기본값으로 되돌린다
    Reset,
    /// 대화형 메뉴 (기본)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정과 저장소를 로드한 뒤 명령을 실행한다.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (cfg, cfg_err) = config::load_with_fallback(&cli.config);
    logging::init(&cfg.log_filter);
    if let Some(err) = cfg_err {
        tracing::warn!(path = %cli.config.display(), error = %err, "설정을 읽지 못해 기본 설정으로 계속합니다");
    }

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, Some(cfg.locale_dir.as_path()));
    let store_path = cli.store.unwrap_or_else(|| cfg.store_path.clone());
    tracing::info!(store = %store_path.display(), lang = %lang, "계산기를 시작합니다");
    let mut calc = Calculator::open(JsonFileStore::open(store_path));

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Show { json } => {
            if json {
                println!("{}", report::render_json(calc.results())?);
            } else {
                println!("{}", report::render_text(calc.results(), &tr));
            }
        }
        Command::Set { key, value } => {
            let stored = app::set_by_key(&mut calc, &key, &value)?;
            println!("{key} = {stored}");
            println!("{}", report::render_text(calc.results(), &tr));
        }
        Command::Fields => {
            for field in Field::ALL {
                let b = field.bounds();
                println!(
                    "{:<24} {:>14} [{} … {}, step {}]  {}",
                    field.key(),
                    field.get(calc.inputs()),
                    b.min,
                    b.max,
                    b.step,
                    tr.t(&field.label_key())
                );
            }
            println!(
                "{:<24} {:>14}  {}",
                "nplus1",
                calc.inputs().n_plus_one,
                tr.t(i18n::keys::N_PLUS_ONE_LABEL)
            );
        }
        Command::Reset => {
            calc.reset();
            println!("{}", tr.t(i18n::keys::RESET_DONE));
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            ui_cli::handle_show(&tr, &mut console, &calc)?;
            app::run(&mut calc, &tr, &mut console)?;
        }
    }
    Ok(())
}
