// analytics-backend/src/service/dashboard_service.rs

use crate::clock::Clock;
use crate::domain::dashboard::{DeliveryMetricsResponse, OrgStatsResponse, PublicStatsResponse};
use crate::domain::project_status::ProjectStatus;
use crate::domain::user_role::UserRole;
use crate::error::AppResult;
use crate::repository::{DirectoryRepository, ProjectFilter, UserFilter};
use crate::utils::currency::sum_budget_amounts;
use crate::utils::percentage::ratio_percent;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// 組織全体のロールアップ統計サービス
pub struct DashboardService {
    directory: Arc<dyn DirectoryRepository>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(directory: Arc<dyn DirectoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { directory, clock }
    }

    /// 組織統計を集計する
    ///
    /// 5本の独立したカウント照会を並行発行して合流する。どれか1本でも
    /// 失敗すればバンドル全体が失敗し、部分結果は返さない。
    pub async fn aggregate_org_stats(&self, window_days: u32) -> AppResult<OrgStatsResponse> {
        let window_start = self.clock.now() - Duration::days(window_days as i64);

        let created_after_filter = UserFilter::created_after(window_start);
        let manager_filter = UserFilter::with_role(UserRole::Manager);
        let project_default_filter = ProjectFilter::default();
        let (active_users, total_managers, total_projects, grouped_counts, budgets) = tokio::try_join!(
            self.directory.count_users(&created_after_filter),
            self.directory.count_users(&manager_filter),
            self.directory.count_projects(&project_default_filter),
            self.directory.group_projects_by_status(),
            self.directory.list_project_budgets(),
        )?;

        // 既知の全ステータスを0で初期化してから実測値を上書きする
        let mut project_counts: HashMap<ProjectStatus, u64> = ProjectStatus::all()
            .into_iter()
            .map(|status| (status, 0))
            .collect();
        project_counts.extend(grouped_counts);

        let total_budget = sum_budget_amounts(&budgets);

        info!(
            active_users = active_users,
            total_projects = total_projects,
            window_days = window_days,
            "Org stats aggregated"
        );

        Ok(OrgStatsResponse {
            active_users,
            total_managers,
            total_projects,
            project_counts,
            total_budget,
        })
    }

    /// デリバリーメトリクスを集計する
    ///
    /// パーセンテージの丸めは出力境界で一回だけ行う。
    pub async fn aggregate_delivery_metrics(&self) -> AppResult<DeliveryMetricsResponse> {
        let project_default_filter = ProjectFilter::default();
        let completed_filter = ProjectFilter::with_status(ProjectStatus::Completed);
        let user_default_filter = UserFilter::default();
        let active_assignees_filter = UserFilter::active_assignees();
        let (total_projects, completed_projects, total_team_members, active_team_members) = tokio::try_join!(
            self.directory.count_projects(&project_default_filter),
            self.directory.count_projects(&completed_filter),
            self.directory.count_users(&user_default_filter),
            self.directory.count_users(&active_assignees_filter),
        )?;

        let completion_rate = ratio_percent(completed_projects, total_projects);
        // 納期遵守の実測シグナルは未導入。完了数同士の比なので、完了が
        // 1件でもあれば100、なければ0になる。
        let on_time_delivery = ratio_percent(completed_projects, completed_projects);
        let resource_utilization = ratio_percent(active_team_members, total_team_members);
        // 予算実績の突合せが入るまで固定値
        let budget_efficiency = 0;

        Ok(DeliveryMetricsResponse {
            completion_rate,
            on_time_delivery,
            resource_utilization,
            budget_efficiency,
            total_projects,
            completed_projects,
            total_team_members,
            active_team_members,
        })
    }

    /// 公開ページ向けの組織統計を集計する
    ///
    /// フォールバック判断は呼び出し側（ファサード）が行う。ここでは
    /// 他バンドルと同じ all-or-nothing で失敗を返す。
    pub async fn aggregate_public_stats(&self, window_days: u32) -> AppResult<PublicStatsResponse> {
        let window_start = self.clock.now() - Duration::days(window_days as i64);

        let created_after_filter = UserFilter::created_after(window_start);
        let project_default_filter = ProjectFilter::default();
        let completed_filter = ProjectFilter::with_status(ProjectStatus::Completed);
        let (active_users, total_projects, completed_projects) = tokio::try_join!(
            self.directory.count_users(&created_after_filter),
            self.directory.count_projects(&project_default_filter),
            self.directory.count_projects(&completed_filter),
        )?;

        Ok(PublicStatsResponse {
            active_users,
            total_projects,
            completed_projects,
            completion_rate: ratio_percent(completed_projects, total_projects),
            no_cache: false,
        })
    }
}
