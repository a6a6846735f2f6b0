// analytics-backend/src/repository/member_workspace_repository.rs

use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// メンバー個人のワークスペースに対する集計照会能力
///
/// チームメンバー向けダッシュボードバンドルの素材となるカウント群。
#[async_trait]
pub trait MemberWorkspaceRepository: Send + Sync {
    /// ユーザーの全タスク数
    async fn count_tasks(&self, user_id: Uuid) -> AppResult<u64>;

    /// ユーザーの完了済みタスク数
    async fn count_completed_tasks(&self, user_id: Uuid) -> AppResult<u64>;

    /// 未読通知数
    async fn count_unread_notifications(&self, user_id: Uuid) -> AppResult<u64>;

    /// 参加中プロジェクト数
    async fn count_member_projects(&self, user_id: Uuid) -> AppResult<u64>;
}
