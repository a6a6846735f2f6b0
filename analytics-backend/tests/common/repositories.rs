// tests/common/repositories.rs
//
// 外部コラボレーターのインメモリ実装。永続化層の代わりにテストが
// 直接状態を組み立てる。

use analytics_backend::clock::Clock;
use analytics_backend::domain::completion_event::CompletionEvent;
use analytics_backend::domain::project_status::ProjectStatus;
use analytics_backend::domain::user_role::UserRole;
use analytics_backend::error::{AppError, AppResult};
use analytics_backend::logging::TelemetrySink;
use analytics_backend::repository::directory_repository::{ProjectFilter, UserFilter};
use analytics_backend::repository::{
    CompletionEventRepository, DirectoryRepository, MemberWorkspaceRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

fn upstream_failure(what: &str) -> AppError {
    AppError::ExternalServiceError(format!("{} unavailable", what))
}

// --- 固定時計 ---

/// 常に同じ時刻を返す時計。日付境界に依存するテストを安定させる。
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// --- 完了イベントストア ---

#[derive(Default)]
pub struct InMemoryEventStore {
    events: Mutex<Vec<CompletionEvent>>,
    failing: AtomicBool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, user_id: Uuid, completed_at: DateTime<Utc>) {
        self.events
            .lock()
            .unwrap()
            .push(CompletionEvent::new(user_id, completed_at));
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl CompletionEventRepository for InMemoryEventStore {
    async fn count_completions(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<u64> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(upstream_failure("completion event store"));
        }

        let count = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && e.completed_at >= start && e.completed_at < end)
            .count();

        Ok(count as u64)
    }
}

// --- ユーザー・プロジェクト台帳 ---

pub struct DirectoryUser {
    pub created_at: DateTime<Utc>,
    pub role: UserRole,
    pub has_task_in_progress: bool,
}

pub struct DirectoryProject {
    pub status: ProjectStatus,
    pub budget: String,
}

#[derive(Default)]
pub struct InMemoryDirectory {
    users: Mutex<Vec<DirectoryUser>>,
    projects: Mutex<Vec<DirectoryProject>>,
    fail_user_counts: AtomicBool,
    fail_status_grouping: AtomicBool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, created_at: DateTime<Utc>, role: UserRole, has_task_in_progress: bool) {
        self.users.lock().unwrap().push(DirectoryUser {
            created_at,
            role,
            has_task_in_progress,
        });
    }

    pub fn add_project(&self, status: ProjectStatus, budget: &str) {
        self.projects.lock().unwrap().push(DirectoryProject {
            status,
            budget: budget.to_string(),
        });
    }

    pub fn set_fail_user_counts(&self, failing: bool) {
        self.fail_user_counts.store(failing, Ordering::SeqCst);
    }

    pub fn set_fail_status_grouping(&self, failing: bool) {
        self.fail_status_grouping.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectory {
    async fn count_users(&self, filter: &UserFilter) -> AppResult<u64> {
        if self.fail_user_counts.load(Ordering::SeqCst) {
            return Err(upstream_failure("user directory"));
        }

        let count = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| {
                filter
                    .created_after
                    .map_or(true, |after| u.created_at >= after)
                    && filter.role.map_or(true, |role| u.role == role)
                    && (!filter.with_tasks_in_progress || u.has_task_in_progress)
            })
            .count();

        Ok(count as u64)
    }

    async fn count_projects(&self, filter: &ProjectFilter) -> AppResult<u64> {
        let count = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.status.map_or(true, |status| p.status == status))
            .count();

        Ok(count as u64)
    }

    async fn group_projects_by_status(&self) -> AppResult<HashMap<ProjectStatus, u64>> {
        if self.fail_status_grouping.load(Ordering::SeqCst) {
            return Err(upstream_failure("project status grouping"));
        }

        let mut grouped = HashMap::new();
        for project in self.projects.lock().unwrap().iter() {
            *grouped.entry(project.status).or_insert(0u64) += 1;
        }

        Ok(grouped)
    }

    async fn list_project_budgets(&self) -> AppResult<Vec<String>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.budget.clone())
            .collect())
    }
}

// --- メンバーワークスペース ---

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceCounts {
    pub tasks_total: u64,
    pub tasks_completed: u64,
    pub unread_notifications: u64,
    pub projects: u64,
}

#[derive(Default)]
pub struct InMemoryWorkspace {
    counts: Mutex<HashMap<Uuid, WorkspaceCounts>>,
}

impl InMemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_counts(&self, user_id: Uuid, counts: WorkspaceCounts) {
        self.counts.lock().unwrap().insert(user_id, counts);
    }

    fn counts_for(&self, user_id: Uuid) -> WorkspaceCounts {
        self.counts
            .lock()
            .unwrap()
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MemberWorkspaceRepository for InMemoryWorkspace {
    async fn count_tasks(&self, user_id: Uuid) -> AppResult<u64> {
        Ok(self.counts_for(user_id).tasks_total)
    }

    async fn count_completed_tasks(&self, user_id: Uuid) -> AppResult<u64> {
        Ok(self.counts_for(user_id).tasks_completed)
    }

    async fn count_unread_notifications(&self, user_id: Uuid) -> AppResult<u64> {
        Ok(self.counts_for(user_id).unread_notifications)
    }

    async fn count_member_projects(&self, user_id: Uuid) -> AppResult<u64> {
        Ok(self.counts_for(user_id).projects)
    }
}

// --- テレメトリ ---

#[derive(Default)]
pub struct RecordingTelemetry {
    measurements: Mutex<Vec<(String, u64)>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> Vec<String> {
        self.measurements
            .lock()
            .unwrap()
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn emit_slow_operation(&self, label: &str, duration_millis: u64) {
        self.measurements
            .lock()
            .unwrap()
            .push((label.to_string(), duration_millis));
    }
}
