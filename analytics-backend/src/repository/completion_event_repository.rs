// analytics-backend/src/repository/completion_event_repository.rs

use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 完了イベントログへの照会能力
///
/// 実装はイベントストアを持つ側（トランスポート層の合成ルート）が提供する。
#[async_trait]
pub trait CompletionEventRepository: Send + Sync {
    /// 半開区間 `[start, end)` に入るユーザーの完了イベント数を返す
    async fn count_completions(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<u64>;
}
