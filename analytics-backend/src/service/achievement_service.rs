// analytics-backend/src/service/achievement_service.rs

use crate::domain::achievement::{
    AchievementCounters, AchievementStatus, Emission, ACHIEVEMENT_RULES,
};

/// 実績ルール表の評価サービス
///
/// 評価は毎回カウンターから再導出され、解除状態は一切永続化しない。
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementService;

impl AchievementService {
    pub fn new() -> Self {
        Self
    }

    /// ルール表を宣言順に評価する
    ///
    /// `Emission::WhenUnlocked` のルールは解除済みの場合のみ結果に含まれる。
    pub fn evaluate(&self, counters: &AchievementCounters) -> Vec<AchievementStatus> {
        ACHIEVEMENT_RULES
            .iter()
            .filter_map(|rule| {
                let unlocked = (rule.unlocked)(counters);

                if rule.emission == Emission::WhenUnlocked && !unlocked {
                    return None;
                }

                Some(AchievementStatus {
                    id: rule.id.to_string(),
                    title: rule.title.to_string(),
                    description: rule.description.to_string(),
                    icon: rule.icon.to_string(),
                    unlocked,
                    progress: (rule.progress)(counters),
                })
            })
            .collect()
    }
}
