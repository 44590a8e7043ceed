//! Resolver behavior over real directory trees: search order, precedence,
//! write-back.

use crate::integration::test_utils::{init_repo, with_home};
use git_pitch::config::{ConfigResolver, SearchPath};
use git_pitch::error::ConfigError;
use tempfile::TempDir;

fn hermetic(search: SearchPath, env: &[(&str, &str)]) -> ConfigResolver {
    ConfigResolver::new(search)
        .with_env_vars(env.iter().map(|(k, v)| (k.to_string(), v.to_string())))
}

#[test]
fn test_default_only_key_is_not_set() {
    let temp = TempDir::new().unwrap();
    let mut resolver = hermetic(SearchPath::new().with_dir(temp.path()), &[]);
    resolver.set_default("output_format", "text").unwrap();
    resolver.initialize().unwrap();

    assert_eq!(resolver.get_string("output_format"), "text");
    assert!(!resolver.is_set("output_format"));
}

#[test]
fn test_file_value_beats_registered_default() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("git-pitch-config.yaml"), "timeout: 5\n").unwrap();

    let mut resolver = hermetic(SearchPath::new().with_dir(temp.path()), &[]);
    resolver.set_default("timeout", 30i64).unwrap();
    resolver.initialize().unwrap();

    assert_eq!(resolver.get_int("timeout"), 5);
    assert!(resolver.is_set("timeout"));
}

#[test]
fn test_metadata_dir_beats_home() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    let home = temp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::write(repo.join(".git/git-pitch-config.yaml"), "source: repo\n").unwrap();
    std::fs::write(home.join("git-pitch-config.yml"), "source: home\nonly_home: 1\n").unwrap();

    let mut resolver = hermetic(SearchPath::standard(&repo, Some(&home)), &[]);
    resolver.initialize().unwrap();

    assert_eq!(resolver.get_string("source"), "repo");
    // Only one file is loaded; lower-ranked files are not merged in
    assert!(!resolver.is_set("only_home"));
}

#[test]
fn test_home_used_outside_repository() {
    let temp = TempDir::new().unwrap();
    let work = temp.path().join("work");
    std::fs::create_dir_all(&work).unwrap();

    with_home(&temp, |home| {
        std::fs::write(home.join("git-pitch-config.yaml"), "source: home\n").unwrap();

        let mut resolver = hermetic(SearchPath::discover_from(&work), &[]);
        resolver.initialize().unwrap();

        assert_eq!(resolver.get_string("source"), "home");
        assert_eq!(
            resolver.config_file(),
            Some(home.join("git-pitch-config.yaml").as_path())
        );
    });
}

#[test]
fn test_full_precedence_chain() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("git-pitch-config.yaml"),
        "name: file\nlevel: file\nlog:\n  format: json\n",
    )
    .unwrap();

    let mut resolver = hermetic(
        SearchPath::new().with_dir(temp.path()),
        &[("GIT_PITCH_NAME", "env"), ("GIT_PITCH_LOG__FORMAT", "text")],
    );
    resolver.set_default("name", "default").unwrap();
    resolver.set_default("level", "default").unwrap();
    resolver.set_default("mode", "default").unwrap();
    resolver.initialize().unwrap();
    resolver.set("mode", "explicit").unwrap();

    assert_eq!(resolver.get_string("mode"), "explicit");
    assert_eq!(resolver.get_string("name"), "env");
    assert_eq!(resolver.get_string("level"), "file");
    assert_eq!(resolver.get_string("log.format"), "text");

    resolver.set("name", "explicit").unwrap();
    assert_eq!(resolver.get_string("name"), "explicit");
}

#[test]
fn test_unreadable_file_fails_initialize() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("git-pitch-config.yaml"), "a: [1, 2\n").unwrap();

    let mut resolver = hermetic(SearchPath::new().with_dir(temp.path()), &[]);
    let err = resolver.initialize().unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailure { .. }));
}

#[test]
fn test_safe_write_then_reload() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());

    let mut resolver = hermetic(SearchPath::standard(&repo, None), &[]);
    resolver.initialize().unwrap();
    resolver.set("timeout", 12i64).unwrap();
    resolver.set("templates.default.title", "Written").unwrap();

    let written = resolver.safe_write_config().unwrap();
    assert_eq!(written, repo.join(".git/git-pitch-config.yaml"));

    let again = resolver.safe_write_config().unwrap_err();
    assert!(matches!(again, ConfigError::AlreadyExists(_)));

    let mut reloaded = hermetic(SearchPath::standard(&repo, None), &[]);
    reloaded.initialize().unwrap();
    assert_eq!(reloaded.get_int("timeout"), 12);
    assert_eq!(reloaded.get_string("templates.default.title"), "Written");
    assert!(reloaded.is_set("timeout"));
}
