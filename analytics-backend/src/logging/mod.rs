// analytics-backend/src/logging/mod.rs

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// トレーシングの設定
///
/// 本クレートを組み込むバイナリが起動時に一度だけ呼ぶ。
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "analytics_backend=info".into()),
        )
        .with(fmt::layer())
        .init();
}

/// 処理時間の通知先
///
/// バンドル計算のたびに無条件で呼ばれる fire-and-forget の口。
/// 何をもって「遅い」とするかの閾値判断は通知先の責務。
pub trait TelemetrySink: Send + Sync {
    fn emit_slow_operation(&self, label: &str, duration_millis: u64);
}

/// tracing に記録するデフォルトのテレメトリ実装
#[derive(Debug, Clone, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn emit_slow_operation(&self, label: &str, duration_millis: u64) {
        info!(
            label = %label,
            duration_ms = duration_millis,
            "Operation duration recorded"
        );
    }
}
