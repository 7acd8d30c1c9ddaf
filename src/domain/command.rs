//! Message classification.
//!
//! Every inbound text message is classified into exactly one [`Command`]
//! by [`classify`]. The match order in that one function is the priority
//! order; the router dispatches over the closed enum so nothing falls
//! through unnoticed.

/// Classified inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Clear conversation continuity for the sender.
    Reset,
    /// Store one settings field. `key` is the literal token the user typed.
    UpdateSetting { key: String, value: String },
    /// Settings-update prefix with too few arguments; reply with usage help.
    SettingsHelp,
    /// Show the sender's current settings.
    ShowSettings,
    /// Anything else; forward to the AI backend verbatim.
    Forward,
}

/// Synonyms that clear conversation continuity (case-insensitive).
const RESET_WORDS: [&str; 4] = ["リセット", "reset", "クリア", "clear"];

/// Synonyms for "show settings" (case-insensitive).
const QUERY_WORDS: [&str; 3] = ["設定確認", "設定一覧", "settings"];

/// Prefix token of the settings-update command, including the separator.
const UPDATE_PREFIX: &str = "設定 ";

/// Classifies a raw message text. First match wins.
pub fn classify(text: &str) -> Command {
    let lowered = text.to_lowercase();

    if RESET_WORDS.iter().any(|w| lowered == *w) {
        return Command::Reset;
    }

    if let Some(rest) = text.strip_prefix(UPDATE_PREFIX) {
        // Key is the first token; value is everything after it and may
        // itself contain spaces.
        return match rest.split_once(' ') {
            Some((key, value)) if !key.is_empty() && !value.trim().is_empty() => {
                Command::UpdateSetting {
                    key: key.to_string(),
                    value: value.trim().to_string(),
                }
            }
            _ => Command::SettingsHelp,
        };
    }

    if QUERY_WORDS.iter().any(|w| lowered == *w) {
        return Command::ShowSettings;
    }

    Command::Forward
}
