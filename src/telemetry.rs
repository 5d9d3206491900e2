use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// tracingのサブスクライバを初期化する
///
/// `RUST_LOG`が未設定なら`book_lending=info`。
/// 既にグローバルなサブスクライバがある場合は何もしない。
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_lending=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
