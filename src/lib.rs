//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진과 저장소를 공유한다.

pub mod app;
pub mod config;
pub mod fields;
pub mod format;
pub mod i18n;
pub mod inputs;
pub mod logging;
pub mod persistence;
pub mod report;
pub mod session;
pub mod sizing;
pub mod store;
pub mod ui_cli;
