//! Tests for the init command

use super::test_helpers::{error_kind, run_init};
use crate::common::{create_test_gateway, create_test_marker, TestRepo};
use repogate::cli::commands::{init, InitArgs};
use repogate::cli::OutputFormat;
use repogate::core::error::ErrorKind;

#[test]
fn test_init_records_canonical_root() {
    let repo = TestRepo::small();
    let (marker, _state) = create_test_marker();

    run_init(&repo, &marker);

    let canonical = repo.path().canonicalize().unwrap();
    assert_eq!(marker.load(), Some(canonical.to_string_lossy().into_owned()));
}

#[test]
fn test_init_binds_current_gateway() {
    let repo = TestRepo::small();
    let (marker, _state) = create_test_marker();
    let gateway = create_test_gateway();

    init::execute(
        InitArgs {
            path: Some(repo.path_str().to_string()),
        },
        &gateway,
        &marker,
        OutputFormat::Human,
    )
    .unwrap();

    assert_eq!(gateway.session().root_path().as_deref(), Some(repo.path_str()));
}

#[test]
fn test_init_without_path_is_validation_error() {
    let (marker, _state) = create_test_marker();
    let gateway = create_test_gateway();

    for path in [None, Some("".to_string()), Some("   ".to_string())] {
        let err = init::execute(InitArgs { path }, &gateway, &marker, OutputFormat::Json)
            .unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::Validation);
        assert_eq!(err.to_string(), "path is required");
    }
    assert_eq!(marker.load(), None);
}

#[test]
fn test_init_bad_path_leaves_marker_untouched() {
    let repo = TestRepo::small();
    let (marker, _state) = create_test_marker();
    run_init(&repo, &marker);
    let before = marker.load();

    let gateway = create_test_gateway();
    let err = init::execute(
        InitArgs {
            path: Some("/definitely/not/a/repository".to_string()),
        },
        &gateway,
        &marker,
        OutputFormat::Json,
    )
    .unwrap_err();

    assert_eq!(error_kind(&err), ErrorKind::Binding);
    assert_eq!(marker.load(), before);
}

#[test]
fn test_later_init_replaces_marker() {
    let a = TestRepo::small();
    let b = TestRepo::other();
    let (marker, _state) = create_test_marker();

    run_init(&a, &marker);
    run_init(&b, &marker);

    let canonical = b.path().canonicalize().unwrap();
    assert_eq!(marker.load(), Some(canonical.to_string_lossy().into_owned()));
}
