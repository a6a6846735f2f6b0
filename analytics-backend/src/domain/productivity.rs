// analytics-backend/src/domain/productivity.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 生産性シリーズの固定長（末尾が基準日）
pub const SERIES_LENGTH: usize = 7;

/// シリーズ位置 0..6 に対応する曜日短縮ラベル
///
/// ラベルは配列位置で決まり、各日付の実際の曜日からは導出されない。
/// 基準日が土曜日でない限り実曜日とは一致しない点も含めて既存挙動。
pub const DAY_LABELS: [char; SERIES_LENGTH] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

/// 1日分の完了数データポイント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityPoint {
    /// 位置ベースの曜日ラベル
    pub day: String,
    /// 集計対象のカレンダー日
    pub date: NaiveDate,
    /// その日の完了イベント数
    pub count: u64,
}
