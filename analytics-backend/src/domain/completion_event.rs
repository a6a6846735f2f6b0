// analytics-backend/src/domain/completion_event.rs

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// タスク完了イベント
///
/// 外部のイベントストアが所有する不変レコード。本クレートは範囲カウントの
/// 照会のみを行い、作成・更新・削除は一切行わない。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub user_id: Uuid,
    pub completed_at: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn new(user_id: Uuid, completed_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            completed_at,
        }
    }
}

/// カレンダー日 `day` に対応する半開区間 `[00:00, 翌日00:00)` をUTC時刻で返す
pub fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1);
    (start, end)
}
