//! Fixed user-facing reply strings.
//!
//! Shared by the message router and the Dify client so the exact wording
//! lives in one place.

use super::UserSettings;

/// Confirmation after clearing conversation continuity.
pub const RESET_DONE: &str = "会話履歴をリセットしました。新しい会話を始めましょう！";

/// Returned when a successful Dify response carries no `answer` field.
pub const NO_ANSWER: &str = "申し訳ありません。応答を生成できませんでした。";

/// Returned when the Dify call exceeds its timeout.
pub const TIMEOUT: &str = "応答がタイムアウトしました。もう一度お試しください。";

/// Returned on any other Dify transport or HTTP error.
pub const BACKEND_ERROR: &str = "エラーが発生しました。しばらくしてからもう一度お試しください。";

/// Usage help for the settings-update command.
pub const SETTINGS_USAGE: &str = "使い方: 設定 <項目> <値>\n\
例:\n\
設定 年齢 3歳\n\
設定 最寄り駅 渋谷駅\n\
設定 天気 晴れ";

/// Rejection for a key outside the synonym table.
pub const UNKNOWN_SETTING: &str =
    "その設定項目はありません。設定できる項目: 年齢 / 最寄り駅(住所) / 天気";

/// Placeholder shown for an absent field in the settings summary.
pub const NOT_SET: &str = "未設定";

/// Confirmation echoing the literal key and value of a settings update.
pub fn settings_saved(key: &str, value: &str) -> String {
    format!("設定を保存しました: {} = {}", key, value)
}

/// Reply for a settings query when nothing has been set yet.
pub fn no_settings_yet() -> String {
    format!("設定はまだありません。\n{}", SETTINGS_USAGE)
}

/// Three-line summary of the current settings.
pub fn settings_summary(settings: &UserSettings) -> String {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_SET.to_string());
    format!(
        "現在の設定:\n年齢: {}\n最寄り駅: {}\n天気: {}",
        show(&settings.age),
        show(&settings.address),
        show(&settings.weather)
    )
}
