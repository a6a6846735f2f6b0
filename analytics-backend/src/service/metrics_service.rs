// analytics-backend/src/service/metrics_service.rs

use crate::clock::{Clock, SystemClock};
use crate::config::AnalyticsConfig;
use crate::domain::achievement::{AchievementCounters, AchievementStatus};
use crate::domain::dashboard::{
    DeliveryMetricsResponse, MemberDashboardResponse, OrgStatsResponse, PublicStatsResponse,
    TaskSummary,
};
use crate::domain::productivity::ProductivityPoint;
use crate::error::AppResult;
use crate::logging::TelemetrySink;
use crate::repository::{
    CompletionEventRepository, DirectoryRepository, MemberWorkspaceRepository,
};
use crate::service::achievement_service::AchievementService;
use crate::service::dashboard_service::DashboardService;
use crate::service::productivity_service::ProductivityService;
use crate::service::streak_service::StreakService;
use crate::utils::error_helper::{convert_validation_errors, unauthorized_error};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// 統計期間パラメータ
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OrgStatsQuery {
    #[validate(range(min = 1, max = 365, message = "Days must be between 1 and 365"))]
    pub days: Option<u32>,
}

/// メトリクスバンドルのファサード
///
/// 認証済みプリンシパルの解決はトランスポート層の責務で、ここには
/// 解決済みのユーザーIDだけが渡ってくる。各バンドルの計算時間を計測し、
/// 成否にかかわらずテレメトリへ通知する。
pub struct MetricsService {
    config: AnalyticsConfig,
    events: Arc<dyn CompletionEventRepository>,
    workspace: Arc<dyn MemberWorkspaceRepository>,
    telemetry: Arc<dyn TelemetrySink>,
    clock: Arc<dyn Clock>,
    streak_service: StreakService,
    achievement_service: AchievementService,
    productivity_service: ProductivityService,
    dashboard_service: DashboardService,
}

impl MetricsService {
    pub fn new(
        config: AnalyticsConfig,
        events: Arc<dyn CompletionEventRepository>,
        directory: Arc<dyn DirectoryRepository>,
        workspace: Arc<dyn MemberWorkspaceRepository>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self::with_clock(
            config,
            events,
            directory,
            workspace,
            telemetry,
            Arc::new(SystemClock),
        )
    }

    /// 時計を差し替えて構築する（テストや再計算ジョブ用）
    pub fn with_clock(
        config: AnalyticsConfig,
        events: Arc<dyn CompletionEventRepository>,
        directory: Arc<dyn DirectoryRepository>,
        workspace: Arc<dyn MemberWorkspaceRepository>,
        telemetry: Arc<dyn TelemetrySink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            streak_service: StreakService::new(events.clone()),
            achievement_service: AchievementService::new(),
            productivity_service: ProductivityService::new(events.clone()),
            dashboard_service: DashboardService::new(directory, clock.clone()),
            config,
            events,
            workspace,
            telemetry,
            clock,
        }
    }

    /// ユーザーの実績一覧
    pub async fn get_user_achievements(
        &self,
        user: Option<Uuid>,
    ) -> AppResult<Vec<AchievementStatus>> {
        let user_id = self.require_user(user)?;
        self.measured("analytics.achievements", self.compute_achievements(user_id))
            .await
    }

    /// 直近7日間の生産性シリーズ
    pub async fn get_productivity_series(
        &self,
        user: Option<Uuid>,
    ) -> AppResult<Vec<ProductivityPoint>> {
        let user_id = self.require_user(user)?;
        let today = self.clock.now().date_naive();
        self.measured(
            "analytics.productivity",
            self.productivity_service.build_series(user_id, today),
        )
        .await
    }

    /// チームメンバー向けダッシュボードバンドル
    pub async fn get_member_dashboard(
        &self,
        user: Option<Uuid>,
    ) -> AppResult<MemberDashboardResponse> {
        let user_id = self.require_user(user)?;
        self.measured("analytics.dashboard", self.compute_member_dashboard(user_id))
            .await
    }

    /// 管理者向けの組織統計バンドル
    ///
    /// 上流照会の失敗はそのまま呼び出し側へ伝播する。
    pub async fn get_admin_stats(&self, query: OrgStatsQuery) -> AppResult<OrgStatsResponse> {
        query
            .validate()
            .map_err(|e| convert_validation_errors(e, "metrics_service::get_admin_stats"))?;

        let window_days = query.days.unwrap_or(self.config.org_stats_window_days);
        self.measured(
            "analytics.admin_stats",
            self.dashboard_service.aggregate_org_stats(window_days),
        )
        .await
    }

    /// 公開ページ向けの組織統計バンドル
    ///
    /// 非認証ページでは可用性を正確性より優先する。上流照会が失敗した
    /// 場合はエラーを返さず、`no_cache` 付きのゼロ埋めバンドルへ落とす。
    pub async fn get_public_stats(&self) -> PublicStatsResponse {
        let result = self
            .measured(
                "analytics.public_stats",
                self.dashboard_service
                    .aggregate_public_stats(self.config.org_stats_window_days),
            )
            .await;

        match result {
            Ok(stats) => stats,
            Err(error) => {
                warn!(
                    error = %error,
                    "Public stats query failed, serving placeholder"
                );
                PublicStatsResponse::placeholder()
            }
        }
    }

    /// デリバリーメトリクスバンドル
    pub async fn get_delivery_metrics(&self) -> AppResult<DeliveryMetricsResponse> {
        self.measured(
            "analytics.delivery_metrics",
            self.dashboard_service.aggregate_delivery_metrics(),
        )
        .await
    }

    fn require_user(&self, user: Option<Uuid>) -> AppResult<Uuid> {
        user.ok_or_else(|| {
            unauthorized_error("Authentication required", "metrics_service::require_user")
        })
    }

    /// 計算時間を計測してテレメトリへ通知する
    ///
    /// 通知は結果の成否にかかわらず毎回行う。
    async fn measured<T>(&self, label: &str, computation: impl Future<Output = T>) -> T {
        let started = Instant::now();
        let result = computation.await;
        self.telemetry
            .emit_slow_operation(label, started.elapsed().as_millis() as u64);
        result
    }

    async fn compute_achievements(&self, user_id: Uuid) -> AppResult<Vec<AchievementStatus>> {
        let now = self.clock.now();
        // 「今週」はカレンダー週ではなく評価時点から遡る7×24時間
        let week_start = now - Duration::days(7);

        let (total_completed, completed_this_week) = tokio::try_join!(
            self.events
                .count_completions(user_id, DateTime::<Utc>::UNIX_EPOCH, now),
            self.events.count_completions(user_id, week_start, now),
        )?;

        let current_streak = self
            .streak_service
            .compute_streak(
                user_id,
                now.date_naive(),
                self.config.streak_lookback_days,
            )
            .await?;

        let counters = AchievementCounters {
            total_completed,
            completed_this_week,
            current_streak,
        };

        info!(
            user_id = %user_id,
            total_completed = total_completed,
            completed_this_week = completed_this_week,
            current_streak = current_streak,
            "Achievement counters assembled"
        );

        Ok(self.achievement_service.evaluate(&counters))
    }

    async fn compute_member_dashboard(&self, user_id: Uuid) -> AppResult<MemberDashboardResponse> {
        let (total, completed, notifications, projects) = tokio::try_join!(
            self.workspace.count_tasks(user_id),
            self.workspace.count_completed_tasks(user_id),
            self.workspace.count_unread_notifications(user_id),
            self.workspace.count_member_projects(user_id),
        )?;

        Ok(MemberDashboardResponse {
            tasks: TaskSummary {
                total,
                completed,
                pending: total.saturating_sub(completed),
            },
            notifications,
            projects,
        })
    }
}
