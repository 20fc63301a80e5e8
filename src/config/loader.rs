//! Rule file loading

use crate::config::raw::RawConfig;
use crate::config::ConfigError;
use crate::domain::{Config, ResourceCategory};
use std::fs;
use std::path::{Path, PathBuf};

/// Load and compile the rule file at `path`.
///
/// Relative paths are resolved against the current directory. Any failure
/// (path, read, YAML shape, regex syntax) is returned as-is; no partial
/// config is ever produced.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    // An empty path names the current directory, which then fails to read as a file.
    let target = if path.as_os_str().is_empty() { Path::new(".") } else { path };
    let absolute = std::path::absolute(target)
        .map_err(|source| ConfigError::Path { path: path.to_path_buf(), source })?;
    tracing::debug!("Loading rule file {}", absolute.display());

    let content = fs::read_to_string(&absolute)
        .map_err(|source| ConfigError::Io { path: absolute.clone(), source })?;

    let raw = parse_yaml_config(&content, &absolute)?;
    let config = raw.compile()?;

    for category in ResourceCategory::ALL {
        let resource = config.resource(category);
        tracing::info!(
            category = %category,
            include = resource.include.len(),
            exclude = resource.exclude.len(),
            "Compiled name filters"
        );
    }

    Ok(config)
}

/// Parse YAML into the raw structure. An empty document is an empty config.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<RawConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }

    let parse_err = |source: serde_yaml::Error| ConfigError::Parse { path: PathBuf::from(config_file), source };

    // Generic parse only detects comment-only documents; going through the
    // Value would turn bare scalars like `2024` into numbers.
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_err)?;
    if value.is_null() {
        return Ok(RawConfig::default());
    }

    serde_yaml::from_str(content).map_err(parse_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r#"
s3:
  include:
    names_regex:
      - ^prod-
  exclude:
    names_regex:
      - -tmp$
IAMUsers:
  include:
    names_regex: []
  exclude:
    names_regex:
      - ^test-
"#;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn test_load_full_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, FULL_CONFIG);

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.s3.include.len(), 1);
        assert_eq!(cfg.s3.exclude.len(), 1);
        assert!(cfg.iam_users.include.is_empty());
        assert_eq!(cfg.iam_users.exclude.len(), 1);

        assert!(cfg.s3.should_include("prod-db"));
        assert!(!cfg.s3.should_include("prod-db-tmp"));
        assert!(!cfg.s3.should_include("dev-db"));
        assert!(!cfg.iam_users.should_include("test-user"));
        assert!(cfg.iam_users.should_include("alice"));
    }

    #[test]
    fn test_missing_exclude_sections_are_empty() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(
            &tmp,
            "s3:\n  include:\n    names_regex: ['^prod-']\nIAMUsers:\n  include:\n    names_regex: ['^svc-']\n",
        );

        let cfg = load_config(&path).expect("config");
        assert!(cfg.s3.exclude.is_empty());
        assert!(cfg.iam_users.exclude.is_empty());
        assert_eq!(cfg.iam_users.include.len(), 1);
    }

    #[test]
    fn test_empty_and_comment_only_files_load_as_empty() {
        let tmp = TempDir::new().expect("tmp");
        for content in ["", "   \n", "# nothing configured yet\n"] {
            let path = write_config(&tmp, content);
            let cfg = load_config(&path).expect("config");
            assert!(cfg.s3.include.is_empty() && cfg.s3.exclude.is_empty());
            assert!(cfg.iam_users.include.is_empty() && cfg.iam_users.exclude.is_empty());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_path_is_resolved() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, FULL_CONFIG);
        let cwd = std::env::current_dir().expect("cwd");
        // Climb to the filesystem root, then walk down to the temp file.
        let mut relative = PathBuf::new();
        for _ in cwd.ancestors().skip(1) {
            relative.push("..");
        }
        relative.push(path.strip_prefix("/").unwrap_or(&path));

        let cfg = load_config(&relative).expect("config");
        assert_eq!(cfg.s3.include.len(), 1);
    }

    #[test]
    fn test_empty_path_reads_current_directory() {
        match load_config("") {
            Err(ConfigError::Io { path, .. }) => {
                assert!(path.is_absolute());
                assert!(path.is_dir(), "expected the working directory, got {}", path.display());
            }
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_scalar_patterns_are_text() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(
            &tmp,
            "s3:\n  include:\n    names_regex:\n      - 2024\n      - 1.5\n      - true\n",
        );

        let cfg = load_config(&path).expect("config");
        let compiled: Vec<&str> = cfg.s3.include.names_regex.iter().map(|re| re.as_str()).collect();
        assert_eq!(compiled, vec!["2024", "1.5", "true"]);
        assert!(cfg.s3.should_include("backup-2024-01"));
        assert!(!cfg.s3.should_include("backup-2023"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let missing = tmp.path().join("nope.yaml");

        match load_config(&missing) {
            Err(ConfigError::Io { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_types_are_parse_errors() {
        let tmp = TempDir::new().expect("tmp");
        for content in [
            "s3:\n  include:\n    names_regex: 123\n",
            "s3:\n  include:\n    names_regex: [['nested']]\n",
            "s3: [1, 2]\n",
            "- just\n- a list\n",
            "s3:\n  include: {names_regex: [unterminated\n",
        ] {
            let path = write_config(&tmp, content);
            let result = load_config(&path);
            assert!(
                matches!(result, Err(ConfigError::Parse { .. })),
                "content {:?} gave {:?}",
                content,
                result
            );
        }
    }

    #[test]
    fn test_invalid_pattern_aborts_load() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(
            &tmp,
            "s3:\n  include:\n    names_regex: ['^prod-']\nIAMUsers:\n  exclude:\n    names_regex: ['^ok', '(unclosed']\n",
        );

        match load_config(&path) {
            Err(ConfigError::Pattern { category, kind, pattern, .. }) => {
                assert_eq!(category, ResourceCategory::IamUsers);
                assert_eq!(kind, crate::domain::RuleKind::Exclude);
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("expected pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_twice_gives_independent_equivalent_configs() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, FULL_CONFIG);

        let first = load_config(&path).expect("first");
        let second = load_config(&path).expect("second");

        for name in ["prod-db", "prod-db-tmp", "dev-db", "test-user", "alice", ""] {
            for category in ResourceCategory::ALL {
                assert_eq!(
                    first.should_include(category, name),
                    second.should_include(category, name),
                    "{} / {}",
                    category,
                    name
                );
            }
        }
    }
}
