// analytics-backend/src/domain/dashboard.rs

use crate::domain::project_status::ProjectStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 組織全体の統計（管理者向けバンドル）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgStatsResponse {
    /// 遡及ウィンドウ内に作成されたユーザー数
    pub active_users: u64,
    pub total_managers: u64,
    pub total_projects: u64,
    /// 既知4ステータスを必ず全て含むステータス別プロジェクト数
    pub project_counts: HashMap<ProjectStatus, u64>,
    /// 予算テキストの寛容パースによる合計値
    pub total_budget: f64,
}

/// 納期・稼働系のデリバリーメトリクス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryMetricsResponse {
    pub completion_rate: u32,
    pub on_time_delivery: u32,
    pub resource_utilization: u32,
    pub budget_efficiency: u32,
    pub total_projects: u64,
    pub completed_projects: u64,
    pub total_team_members: u64,
    pub active_team_members: u64,
}

/// メンバー個人のタスク集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
}

/// チームメンバー向けダッシュボードバンドル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDashboardResponse {
    pub tasks: TaskSummary,
    pub notifications: u64,
    pub projects: u64,
}

/// 非認証の公開ページ向け統計バンドル
///
/// `no_cache` はフォールバック応答の目印で、トランスポート層が
/// キャッシュ抑止ヘッダーへ変換する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicStatsResponse {
    pub active_users: u64,
    pub total_projects: u64,
    pub completed_projects: u64,
    pub completion_rate: u32,
    pub no_cache: bool,
}

impl PublicStatsResponse {
    /// 上流障害時に返すゼロ埋めプレースホルダー
    pub fn placeholder() -> Self {
        Self {
            active_users: 0,
            total_projects: 0,
            completed_projects: 0,
            completion_rate: 0,
            no_cache: true,
        }
    }
}
