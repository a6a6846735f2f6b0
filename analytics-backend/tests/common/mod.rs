// tests/common/mod.rs
#![allow(dead_code)]

pub mod repositories;

use analytics_backend::config::AnalyticsConfig;
use analytics_backend::service::metrics_service::MetricsService;
use chrono::{DateTime, Utc};
use repositories::{
    FixedClock, InMemoryDirectory, InMemoryEventStore, InMemoryWorkspace, RecordingTelemetry,
};
use std::sync::{Arc, Once};

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("analytics_backend=debug")
            .with_test_writer()
            .try_init();
    });
}

/// インメモリのコラボレーター一式とファサード
///
/// 時計は `test_data::reference_date()` の正午に固定してあり、
/// 日付境界に依存するテストが実行時刻に左右されない。
pub struct TestBackend {
    pub events: Arc<InMemoryEventStore>,
    pub directory: Arc<InMemoryDirectory>,
    pub workspace: Arc<InMemoryWorkspace>,
    pub telemetry: Arc<RecordingTelemetry>,
    /// ファサードが観測する「現在時刻」
    pub now: DateTime<Utc>,
    pub metrics: MetricsService,
}

pub fn build_backend() -> TestBackend {
    init_test_env();

    let events = Arc::new(InMemoryEventStore::new());
    let directory = Arc::new(InMemoryDirectory::new());
    let workspace = Arc::new(InMemoryWorkspace::new());
    let telemetry = Arc::new(RecordingTelemetry::new());
    let now = test_data::at_noon(test_data::reference_date());

    let metrics = MetricsService::with_clock(
        AnalyticsConfig::default(),
        events.clone(),
        directory.clone(),
        workspace.clone(),
        telemetry.clone(),
        Arc::new(FixedClock(now)),
    );

    TestBackend {
        events,
        directory,
        workspace,
        telemetry,
        now,
        metrics,
    }
}
