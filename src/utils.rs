use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

use crate::models::TIMESTAMP_FORMAT;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    /// Directory name used under the platform config/data roots
    pub fn app_name(self) -> &'static str {
        match self {
            Profile::Dev => "idealog-dev",
            Profile::Prod => "idealog",
        }
    }
}

fn project_dirs(profile: Profile) -> Option<ProjectDirs> {
    ProjectDirs::from("com", "idealog", profile.app_name())
}

/// Get the configuration directory path
/// If profile is Dev, uses "idealog-dev" instead of "idealog"
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    project_dirs(profile).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory path (where the idea store lives)
pub fn get_data_dir(profile: Profile) -> Option<PathBuf> {
    project_dirs(profile).map(|dirs| dirs.data_dir().to_path_buf())
}

/// Expand `~` in a path string to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`
pub fn current_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("ideas.db"), PathBuf::from("ideas.db"));
        assert_eq!(expand_path("/tmp/ideas.db"), PathBuf::from("/tmp/ideas.db"));
    }

    #[test]
    fn expand_path_resolves_home() {
        let expanded = expand_path("~/ideas.db");
        if let Some(home) = BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            assert_eq!(expanded, home.join("ideas.db"));
        }
    }

    #[test]
    fn timestamp_has_fixed_width() {
        let ts = current_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn profiles_use_separate_directories() {
        assert_ne!(Profile::Dev.app_name(), Profile::Prod.app_name());
    }
}
