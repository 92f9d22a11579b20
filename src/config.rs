use crate::engine::types::Color;

/// Game configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side driven by direct input. The other side is expected to be played
    /// by an external move selector.
    pub human_color: Color,
}

impl GameConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let human_color = match lookup("CHESS_HUMAN_COLOR") {
            None => Color::White,
            Some(raw) => Color::from_str_loose(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring invalid CHESS_HUMAN_COLOR, using white");
                Color::White
            }),
        };
        GameConfig { human_color }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human_color: Color::White,
        }
    }
}
