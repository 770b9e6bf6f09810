//! file: config.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:15:31 Monday
//! brief:

use std::{env, path::PathBuf};

pub const STORE_PATH_VAR: &str = "SCORE_TRACKER_STORE";
pub const DEFAULT_STORE_PATH: &str = "score-tracker.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_store_var(env::var_os(STORE_PATH_VAR).map(PathBuf::from))
    }

    fn from_store_var(store_path: Option<PathBuf>) -> Self {
        let store_path = store_path
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
        Self { store_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_store_var(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_store() {
        assert_eq!(
            Config::default().store_path,
            PathBuf::from(DEFAULT_STORE_PATH)
        );
        assert_eq!(
            Config::from_store_var(Some(PathBuf::new())).store_path,
            PathBuf::from(DEFAULT_STORE_PATH)
        );
    }

    #[test]
    fn honours_explicit_store() {
        let config = Config::from_store_var(Some(PathBuf::from("/tmp/scores.json")));
        assert_eq!(config.store_path, PathBuf::from("/tmp/scores.json"));
    }
}
