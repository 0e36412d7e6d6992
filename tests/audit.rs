//! Manifest audit tests against a mock registry

mod helper;

use std::sync::Arc;

use pydep_check::audit::AuditStatus;
use pydep_check::config::AuditMode;
use pydep_check::manifest::ManifestError;
use pydep_check::parser::ParseError;
use pydep_check::runner::run_with_registry;

use helper::{MockRegistry, create_config, create_manifest, read_manifest};

fn foo_registry() -> MockRegistry {
    MockRegistry::new().with_releases(
        "foo",
        vec![
            ("1.0.0", vec!["2021-01-01T00:00:00"]),
            ("2.0.0", vec!["2022-06-01T00:00:00"]),
        ],
    )
}

#[tokio::test]
async fn report_mode_fails_on_unsafe_pin_and_keeps_file() {
    let (_temp_dir, path) = create_manifest("foo==2.0.0\n");
    let config = create_config(&path, "2022-01-01", AuditMode::Report);

    let status = run_with_registry(&config, Arc::new(foo_registry()))
        .await
        .unwrap();

    assert_eq!(status, AuditStatus::Violations);
    assert_eq!(status.code(), 2);
    assert_eq!(read_manifest(&path), "foo==2.0.0\n");
}

#[tokio::test]
async fn rewrite_mode_downgrades_unsafe_pin() {
    let (_temp_dir, path) = create_manifest("foo==2.0.0\n");
    let config = create_config(&path, "2022-01-01", AuditMode::Rewrite);

    let status = run_with_registry(&config, Arc::new(foo_registry()))
        .await
        .unwrap();

    assert_eq!(status, AuditStatus::Success);
    assert_eq!(read_manifest(&path), "foo==1.0.0\n");
}

#[tokio::test]
async fn rewrite_mode_is_idempotent() {
    let (_temp_dir, path) = create_manifest("foo>=2.0.0\n\nbar~=3.1\n");
    let registry = Arc::new(foo_registry().with_releases(
        "bar",
        vec![
            ("3.0", vec!["2020-01-01T00:00:00"]),
            ("3.1", vec!["2021-12-31T23:59:59"]),
            ("3.2", vec!["2022-01-02T00:00:00"]),
        ],
    ));
    let config = create_config(&path, "01/01/2022", AuditMode::Rewrite);

    let first = run_with_registry(&config, registry.clone()).await.unwrap();
    let after_first = read_manifest(&path);
    let second = run_with_registry(&config, registry).await.unwrap();

    assert_eq!(first, AuditStatus::Success);
    assert_eq!(second, AuditStatus::Success);
    assert_eq!(after_first, "foo>=1.0.0\nbar~=3.1\n");
    assert_eq!(read_manifest(&path), after_first);
}

#[tokio::test]
async fn all_safe_manifest_round_trips_in_rewrite_mode() {
    let content = "foo==1.0.0\nfoo>1.0.0\nfoo<=1.0.0\n";
    let (_temp_dir, path) = create_manifest(content);
    let config = create_config(&path, "2022-01-01", AuditMode::Rewrite);

    let status = run_with_registry(&config, Arc::new(foo_registry()))
        .await
        .unwrap();

    assert_eq!(status, AuditStatus::Success);
    assert_eq!(read_manifest(&path), content);
}

#[tokio::test]
async fn rewrite_mode_without_safe_version_leaves_file_untouched() {
    let content = "foo==2.0.0\nfresh==0.1.0\n";
    let (_temp_dir, path) = create_manifest(content);
    let registry = foo_registry().with_releases("fresh", vec![("0.1.0", vec!["2023-03-03T00:00:00"])]);
    let config = create_config(&path, "2022-01-01", AuditMode::Rewrite);

    let status = run_with_registry(&config, Arc::new(registry)).await.unwrap();

    assert_eq!(status, AuditStatus::Violations);
    assert_eq!(read_manifest(&path), content);
}

#[tokio::test]
async fn unknown_package_is_reported_as_violation() {
    let (_temp_dir, path) = create_manifest("foo==1.0.0\ninternal-only==1.0\n");
    let config = create_config(&path, "2022-01-01", AuditMode::Report);

    let status = run_with_registry(&config, Arc::new(foo_registry()))
        .await
        .unwrap();

    assert_eq!(status, AuditStatus::Violations);
}

#[tokio::test]
async fn rewrite_mode_normalises_spacing_around_operator() {
    let (_temp_dir, path) = create_manifest("foo == 2.0.0\nfoo >= 1.0.0 \n");
    let config = create_config(&path, "2022-01-01", AuditMode::Rewrite);

    let status = run_with_registry(&config, Arc::new(foo_registry()))
        .await
        .unwrap();

    assert_eq!(status, AuditStatus::Success);
    assert_eq!(read_manifest(&path), "foo==1.0.0\nfoo>=1.0.0\n");
}

#[tokio::test]
async fn directory_path_uses_requirements_txt_inside() {
    let (temp_dir, path) = create_manifest("foo==2.0.0\n");
    let config = create_config(temp_dir.path(), "2022-01-01", AuditMode::Rewrite);

    let status = run_with_registry(&config, Arc::new(foo_registry()))
        .await
        .unwrap();

    assert_eq!(status, AuditStatus::Success);
    assert_eq!(read_manifest(&path), "foo==1.0.0\n");
}

#[tokio::test]
async fn directory_without_manifest_is_not_found() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = create_config(temp_dir.path(), "2022-01-01", AuditMode::Report);
    let registry = Arc::new(foo_registry());

    let err = run_with_registry(&config, registry.clone())
        .await
        .unwrap_err();

    let Some(ManifestError::NotFound(path)) = err.downcast_ref::<ManifestError>() else {
        panic!("expected NotFound, got {err:?}");
    };
    assert_eq!(path, &temp_dir.path().join("requirements.txt"));
    assert!(registry.calls().is_empty());
}

#[tokio::test]
async fn parse_error_aborts_before_any_lookup() {
    let (_temp_dir, path) = create_manifest("foo==1.0.0\nfoo@2.0.0\n");
    let config = create_config(&path, "2022-01-01", AuditMode::Rewrite);
    let registry = Arc::new(foo_registry());

    let err = run_with_registry(&config, registry.clone())
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ParseError>(),
        Some(&ParseError::NoOperator {
            line: 1,
            content: "foo@2.0.0".to_string(),
        })
    );
    assert!(registry.calls().is_empty());
    assert_eq!(read_manifest(&path), "foo==1.0.0\nfoo@2.0.0\n");
}

#[tokio::test]
async fn registry_failure_aborts_without_writing() {
    let content = "foo==2.0.0\nflaky==1.0\n";
    let (_temp_dir, path) = create_manifest(content);
    let config = create_config(&path, "2022-01-01", AuditMode::Rewrite);

    let err = run_with_registry(&config, Arc::new(foo_registry().with_failure("flaky")))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch releases for package flaky");
    assert_eq!(
        format!("{err:#}"),
        "Failed to fetch releases for package flaky: \
         Invalid response: PyPI API returned status 503 Service Unavailable"
    );
    assert_eq!(read_manifest(&path), content);
}

#[tokio::test]
async fn packages_are_looked_up_in_manifest_order() {
    let (_temp_dir, path) = create_manifest("foo==1.0.0\nbar==1.0\nfoo==2.0.0\n");
    let registry = Arc::new(
        foo_registry().with_releases("bar", vec![("1.0", vec!["2019-01-01T00:00:00"])]),
    );
    let mut config = create_config(&path, "2022-01-01", AuditMode::Report);
    config.concurrency = std::num::NonZeroUsize::MIN;

    let status = run_with_registry(&config, registry.clone()).await.unwrap();

    assert_eq!(status, AuditStatus::Violations);
    assert_eq!(registry.calls(), vec!["foo", "bar", "foo"]);
}
