use directories::UserDirs;
use std::path::PathBuf;

const TODO_FILENAME: &str = ".strand.json";
const TODO_FILE_ENV: &str = "STRAND_TODO_FILE";

/// Runtime configuration. The store location is injectable per invocation
/// so tests (and cron entries) can point at their own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandConfig {
    pub todo_file: PathBuf,
}

impl StrandConfig {
    /// Resolution order: explicit override, then `STRAND_TODO_FILE`, then
    /// `~/.strand.json`.
    pub fn resolve(override_path: Option<PathBuf>) -> Self {
        if let Some(path) = override_path {
            return Self { todo_file: path };
        }
        if let Some(path) = std::env::var_os(TODO_FILE_ENV) {
            return Self {
                todo_file: PathBuf::from(path),
            };
        }
        let home = UserDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            todo_file: home.join(TODO_FILENAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let config = StrandConfig::resolve(Some(PathBuf::from("/tmp/override.json")));
        assert_eq!(config.todo_file, PathBuf::from("/tmp/override.json"));
    }

    #[test]
    fn default_lands_in_the_home_directory() {
        // The env var may be set by e2e tests running in parallel, so only
        // check the fallback shape when it is absent.
        if std::env::var_os(TODO_FILE_ENV).is_none() {
            let config = StrandConfig::resolve(None);
            assert!(config.todo_file.ends_with(TODO_FILENAME));
        }
    }
}
