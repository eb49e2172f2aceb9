use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 전역 tracing 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 그 필터를, 없으면 `default_filter`를 쓴다. 출력은 stderr로
/// 보내 CLI 결과(stdout)와 섞이지 않게 한다. 이미 설치돼 있으면 아무 일도 하지 않는다.
pub fn init(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
