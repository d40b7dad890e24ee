//! Theme preference persistence
//!
//! One user preference survives across sessions: the display theme. It is
//! stored as a single token in a file under the platform config directory.
//! A missing or unreadable file just means the default; a failed save is
//! non-fatal and surfaced as a transient message by the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Display theme shared by both front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a theme name; anything unrecognized is `None`
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Location of the theme file, if a config directory can be resolved
///
/// XDG config directory first, then a home-relative fallback.
#[must_use]
pub fn theme_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join("wordle_tui").join("theme"))
}

/// The saved theme, or `None` when nothing valid is saved
#[must_use]
pub fn load_theme() -> Option<Theme> {
    read_theme(&theme_path()?)
}

/// Persist the theme across sessions
///
/// # Errors
///
/// Returns an error when the config directory cannot be resolved or the
/// file cannot be written.
pub fn save_theme(theme: Theme) -> io::Result<()> {
    let path = theme_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    write_theme(&path, theme)
}

fn read_theme(path: &Path) -> Option<Theme> {
    let content = fs::read_to_string(path).ok()?;
    Theme::parse(&content)
}

fn write_theme(path: &Path, theme: Theme) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn parse_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse(" DARK\n"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_file_round_trips() {
        let path = env::temp_dir()
            .join(format!("wordle_tui_theme_test_{}", std::process::id()))
            .join("theme");

        write_theme(&path, Theme::Light).unwrap();
        assert_eq!(read_theme(&path), Some(Theme::Light));

        write_theme(&path, Theme::Dark).unwrap();
        assert_eq!(read_theme(&path), Some(Theme::Dark));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn missing_file_reads_as_none() {
        let path = env::temp_dir().join("wordle_tui_theme_test_missing");
        assert_eq!(read_theme(&path), None);
    }
}
