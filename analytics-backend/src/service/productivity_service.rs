// analytics-backend/src/service/productivity_service.rs

use crate::domain::completion_event::day_window;
use crate::domain::productivity::{ProductivityPoint, DAY_LABELS, SERIES_LENGTH};
use crate::error::AppResult;
use crate::repository::CompletionEventRepository;
use chrono::{Duration, NaiveDate};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 直近7日間の生産性シリーズ構築サービス
pub struct ProductivityService {
    events: Arc<dyn CompletionEventRepository>,
}

impl ProductivityService {
    pub fn new(events: Arc<dyn CompletionEventRepository>) -> Self {
        Self { events }
    }

    /// 基準日を末尾とする7日分の完了数シリーズを古い順で返す
    ///
    /// 7件の日次カウントは並行に照会し、結果は元の日付順に組み直す。
    /// 完了のない日は欠落させず count 0 のポイントとして残る。
    /// いずれかの照会が失敗した場合は部分的なシリーズを作らず全体を失敗させる。
    pub async fn build_series(
        &self,
        user_id: Uuid,
        reference_date: NaiveDate,
    ) -> AppResult<Vec<ProductivityPoint>> {
        let days: Vec<NaiveDate> = (0..SERIES_LENGTH)
            .map(|i| reference_date - Duration::days((SERIES_LENGTH - 1 - i) as i64))
            .collect();

        let queries = days.iter().map(|day| {
            let (start, end) = day_window(*day);
            self.events.count_completions(user_id, start, end)
        });

        let counts = try_join_all(queries).await?;

        let series: Vec<ProductivityPoint> = days
            .into_iter()
            .zip(counts)
            .enumerate()
            .map(|(position, (date, count))| ProductivityPoint {
                // ラベルはシリーズ位置で決まる。date の実曜日は参照しない。
                day: DAY_LABELS[position].to_string(),
                date,
                count,
            })
            .collect();

        debug!(
            user_id = %user_id,
            reference_date = %reference_date,
            total = series.iter().map(|p| p.count).sum::<u64>(),
            "Productivity series built"
        );

        Ok(series)
    }
}
