// analytics-backend/src/clock.rs

use chrono::{DateTime, Utc};

/// 現在時刻の供給源
///
/// 「今日」を起点とする集計の基準時刻を注入可能にするための口。
/// 日境界の扱い（タイムゾーン補正など）は呼び出し側の責務。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// システム時計をそのまま使う実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
