// analytics-backend/src/service/streak_service.rs

use crate::domain::completion_event::day_window;
use crate::error::AppResult;
use crate::repository::CompletionEventRepository;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 連続完了日数の計算サービス
pub struct StreakService {
    events: Arc<dyn CompletionEventRepository>,
}

impl StreakService {
    pub fn new(events: Arc<dyn CompletionEventRepository>) -> Self {
        Self { events }
    }

    /// 基準日から過去へ向かって連続完了日数を数える
    ///
    /// 1日でも完了イベントのない日に当たった時点で打ち切り。基準日自体に
    /// 完了がなければ 0 を返し、それ以前の日は照会しない。走査は最大
    /// `lookback_days` 日まで。
    pub async fn compute_streak(
        &self,
        user_id: Uuid,
        reference_date: NaiveDate,
        lookback_days: u32,
    ) -> AppResult<u32> {
        let mut streak = 0u32;
        let mut day = reference_date;

        for _ in 0..lookback_days {
            let (start, end) = day_window(day);
            let count = self.events.count_completions(user_id, start, end).await?;

            if count == 0 {
                break;
            }

            streak += 1;
            match day.pred_opt() {
                Some(previous) => day = previous,
                None => break,
            }
        }

        debug!(
            user_id = %user_id,
            reference_date = %reference_date,
            streak = streak,
            "Completion streak computed"
        );

        Ok(streak)
    }
}
