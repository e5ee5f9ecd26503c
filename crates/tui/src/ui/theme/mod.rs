//! Theme styling module for the TUI UI layer.
//!
//! Two palettes are available (Dracula, Nord) behind semantic theme roles,
//! plus helper builders for Ratatui widgets and styles. Prefer these helpers
//! over hard-coding colors to keep the UI consistent.

use folio_util::env_non_empty;
use tracing::{debug, warn};

pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Environment variable selecting the palette when no explicit choice is made.
pub const THEME_ENV: &str = "FOLIO_THEME";

const DEFAULT_THEME: &str = "dracula";

/// Selects a theme by name, falling back to `FOLIO_THEME` and then Dracula.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    let requested = preferred_theme
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| env_non_empty(THEME_ENV));

    if let Some(name) = requested {
        if let Some(theme) = resolve(&name) {
            debug!(theme = %name, "using requested theme");
            return theme;
        }
        warn!(theme = %name, "unknown theme; falling back to {DEFAULT_THEME}");
    }
    Box::new(DraculaTheme::new())
}

fn resolve(name: &str) -> Option<Box<dyn Theme>> {
    match name.to_ascii_lowercase().as_str() {
        "dracula" => Some(Box::new(DraculaTheme::new())),
        "nord" => Some(Box::new(NordTheme::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_name_beats_environment() {
        temp_env::with_var(THEME_ENV, Some("dracula"), || {
            let theme = load(Some("Nord"));
            assert_eq!(theme.roles().accent_primary, nord::F1);
        });
    }

    #[test]
    fn environment_is_used_when_no_name_given() {
        temp_env::with_var(THEME_ENV, Some("nord"), || {
            assert_eq!(load(None).roles().accent_primary, nord::F1);
        });
    }

    #[test]
    fn unknown_names_fall_back_to_dracula() {
        temp_env::with_var_unset(THEME_ENV, || {
            assert_eq!(load(Some("solarized")).roles().accent_primary, dracula::PINK);
        });
    }
}
