// analytics-backend/src/domain/achievement.rs

use serde::{Deserialize, Serialize};

/// 次マイルストーンの目標完了数
pub const NEXT_MILESTONE_TARGET: u64 = 20;

/// 実績評価の入力となるカウンター一式
///
/// 毎回の評価時に最新値から組み立てられる。解除状態の永続化は行わないため、
/// カウンターが変われば解除済み実績が結果から消えることもある（仕様通り）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementCounters {
    /// 全期間の完了数
    pub total_completed: u64,
    /// 直近7×24時間の完了数（カレンダー週ではなくローリングウィンドウ）
    pub completed_this_week: u64,
    /// 当日起点の連続完了日数
    pub current_streak: u32,
}

/// ルールの出力ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// 解除済みのときだけ結果に含める
    WhenUnlocked,
    /// 解除状態に関係なく常に結果に含める
    Always,
}

/// 実績ルール定義
///
/// 述語と進捗関数を持つ純粋データ。評価側は表を順に適用するだけで、
/// ルール追加時に評価ロジックへ手を入れる必要はない。
pub struct AchievementRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub emission: Emission,
    pub unlocked: fn(&AchievementCounters) -> bool,
    pub progress: fn(&AchievementCounters) -> u32,
}

fn unlocked_first_10(counters: &AchievementCounters) -> bool {
    counters.total_completed >= 10
}

fn unlocked_weekly_5(counters: &AchievementCounters) -> bool {
    counters.completed_this_week >= 5
}

fn unlocked_streak_3(counters: &AchievementCounters) -> bool {
    counters.current_streak >= 3
}

fn unlocked_next_milestone(counters: &AchievementCounters) -> bool {
    counters.total_completed >= NEXT_MILESTONE_TARGET
}

fn progress_full(_counters: &AchievementCounters) -> u32 {
    100
}

fn progress_next_milestone(counters: &AchievementCounters) -> u32 {
    ((counters.total_completed * 100) / NEXT_MILESTONE_TARGET).min(100) as u32
}

/// 実績ルール表（宣言順が出力順）
///
/// 先頭3件は解除時のみ出力、`next_milestone` だけは未解除でも進捗付きで
/// 常に出力される。この非対称はプロダクト仕様であり揃えてはならない。
pub const ACHIEVEMENT_RULES: &[AchievementRule] = &[
    AchievementRule {
        id: "first_10",
        title: "Getting Started",
        description: "Complete your first 10 tasks",
        icon: "🎉",
        emission: Emission::WhenUnlocked,
        unlocked: unlocked_first_10,
        progress: progress_full,
    },
    AchievementRule {
        id: "weekly_5",
        title: "Weekly Warrior",
        description: "Complete 5 tasks within a week",
        icon: "⚡",
        emission: Emission::WhenUnlocked,
        unlocked: unlocked_weekly_5,
        progress: progress_full,
    },
    AchievementRule {
        id: "streak_3",
        title: "On a Roll",
        description: "Keep a 3-day completion streak",
        icon: "🔥",
        emission: Emission::WhenUnlocked,
        unlocked: unlocked_streak_3,
        progress: progress_full,
    },
    AchievementRule {
        id: "next_milestone",
        title: "Task Master",
        description: "Complete 20 tasks",
        icon: "🏆",
        emission: Emission::Always,
        unlocked: unlocked_next_milestone,
        progress: progress_next_milestone,
    },
];

/// 1ルール分の評価結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    pub progress: u32,
}
