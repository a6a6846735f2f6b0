// analytics-backend/src/utils/currency.rs

/// 通貨表記の予算テキストを数値に変換する
///
/// 数字・小数点・符号以外の文字（通貨記号や桁区切り）を取り除いてから
/// 解析する。解析できない値は集計を失敗させず 0 として扱う。
pub fn parse_budget_amount(raw: &str) -> f64 {
    let normalized: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    normalized.parse::<f64>().unwrap_or(0.0)
}

/// 予算テキスト列の合計値
pub fn sum_budget_amounts<S: AsRef<str>>(budgets: &[S]) -> f64 {
    budgets
        .iter()
        .map(|raw| parse_budget_amount(raw.as_ref()))
        .sum()
}
