// analytics-backend/src/config.rs
use dotenvy::dotenv;
use std::env;

/// アナリティクス計算の設定値
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// ストリーク走査の上限日数（1以上）
    pub streak_lookback_days: u32,
    /// 組織統計で「最近作成されたユーザー」とみなす遡及日数
    pub org_stats_window_days: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            streak_lookback_days: 7,
            org_stats_window_days: 30,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_env() -> Self {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let defaults = Self::default();

        let streak_lookback_days = env::var("STREAK_LOOKBACK_DAYS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|days| *days >= 1)
            .unwrap_or(defaults.streak_lookback_days);

        let org_stats_window_days = env::var("ORG_STATS_WINDOW_DAYS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|days| *days >= 1)
            .unwrap_or(defaults.org_stats_window_days);

        Self {
            streak_lookback_days,
            org_stats_window_days,
        }
    }
}
