// analytics-backend/src/repository/directory_repository.rs

use crate::domain::project_status::ProjectStatus;
use crate::domain::user_role::UserRole;
use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// ユーザー数照会の絞り込み条件
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// この時刻以降に作成されたユーザーのみ数える
    pub created_after: Option<DateTime<Utc>>,
    /// 指定ロールのユーザーのみ数える
    pub role: Option<UserRole>,
    /// 進行中タスクを1件以上持つユーザーのみ数える
    pub with_tasks_in_progress: bool,
}

impl UserFilter {
    pub fn created_after(instant: DateTime<Utc>) -> Self {
        Self {
            created_after: Some(instant),
            ..Self::default()
        }
    }

    pub fn with_role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn active_assignees() -> Self {
        Self {
            with_tasks_in_progress: true,
            ..Self::default()
        }
    }
}

/// プロジェクト数照会の絞り込み条件
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn with_status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// ユーザー・プロジェクト台帳への集計照会能力
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn count_users(&self, filter: &UserFilter) -> AppResult<u64>;

    async fn count_projects(&self, filter: &ProjectFilter) -> AppResult<u64>;

    /// ステータス別のプロジェクト数
    ///
    /// 実データに存在するステータスのキーしか返さない。全ステータスの
    /// ゼロ埋めは集計側の責務。
    async fn group_projects_by_status(&self) -> AppResult<HashMap<ProjectStatus, u64>>;

    /// 全プロジェクトの予算フィールドを未加工テキストのまま返す
    async fn list_project_budgets(&self) -> AppResult<Vec<String>>;
}
