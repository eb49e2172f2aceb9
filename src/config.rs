use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 계산 입력값은 여기가 아니라 저장소에 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 코드(ru/en/ko) 또는 auto
    pub language: String,
    /// 마지막 입력값을 보관하는 JSON 저장소 경로
    pub store_path: PathBuf,
    /// 언어팩(TOML) 디렉터리
    pub locale_dir: PathBuf,
    /// RUST_LOG가 없을 때 쓰는 로그 필터
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            store_path: PathBuf::from("water_calc_state.json"),
            locale_dir: PathBuf::from("locales"),
            log_filter: "info".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 그 경로에 기록한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 설정을 읽되, 실패하면 기본 설정과 그 원인을 함께 돌려준다.
/// 오류는 호출 측이 로거를 설치한 뒤 경고로 남긴다.
pub fn load_with_fallback(path: &Path) -> (Config, Option<ConfigError>) {
    match load_or_default_at(path) {
        Ok(cfg) => (cfg, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
