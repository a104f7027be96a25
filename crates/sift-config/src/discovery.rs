//! Configuration file discovery.
//!
//! Discovers `.sift.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.sift.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sift.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.sift.toml`)
/// last. Traversal stops at a config with `root = true`, in which case the global
/// config is skipped too.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.sift.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local_only(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);

        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_discover_multiple_configs_precedence_order() {
        let test_dir = TestDir::new();
        let root_config = test_dir.create_config_at_root();
        let mid_config = test_dir.create_config("a/b");
        let leaf_config = test_dir.create_config("a/b/c/d");
        let working_dir = test_dir.create_dir("a/b/c/d/e");

        let configs = discover_config_files(&working_dir);

        assert_eq!(
            local_only(&configs),
            vec![&leaf_config, &mid_config, &root_config]
        );
    }

    #[test]
    fn test_global_config_path_ends_with_filename() {
        let path = global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with(CONFIG_FILENAME));
    }

    #[test]
    fn test_is_global_config() {
        let global = global_config_path().unwrap();
        assert!(is_global_config(&global));

        let not_global = PathBuf::from("/some/other/path/.sift.toml");
        assert!(!is_global_config(&not_global));
    }

    #[test]
    fn test_discover_skips_non_file_config() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        let configs = discover_config_files(&subdir);

        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let test_dir = TestDir::new();
        let _parent_config = test_dir.create_config_at_root();
        let root_config = test_dir.create_root_config("project");
        let working_dir = test_dir.create_dir("project/src");

        let configs = discover_config_files(&working_dir);

        // Neither the parent nor the global config is included.
        assert_eq!(configs, vec![root_config]);
    }

    #[test]
    fn test_root_config_includes_child_configs() {
        let test_dir = TestDir::new();
        let _parent_config = test_dir.create_config_at_root();
        let root_config = test_dir.create_root_config("project");
        let child_config = test_dir.create_config("project/sub");
        let working_dir = test_dir.create_dir("project/sub/deep");

        let configs = discover_config_files(&working_dir);

        assert_eq!(configs, vec![child_config, root_config]);
    }

    #[test]
    fn test_root_false_does_not_stop_discovery() {
        let test_dir = TestDir::new();
        let parent_config = test_dir.create_config_at_root();
        let mid_config = test_dir.create_config_with_content("project", "root = false\n");
        let working_dir = test_dir.create_dir("project/src");

        let configs = discover_config_files(&working_dir);

        assert_eq!(local_only(&configs), vec![&mid_config, &parent_config]);
    }
}
