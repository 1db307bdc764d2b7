//! End-to-end open sequences against a real filesystem and the marker
//! engine: directory preparation, engine delegation, and the clear-then-open
//! testing variant.

use depot_fs::{Dir, File, NativePath};
use depot_opener::{ClearingEnsurer, OpenOptions, StoreOpener};
use depot_status::{ErrorKind, StatusExt};
use depot_test_utils::{MarkerEngine, clear_scratch, init_tracing, scratch_dir};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn native(path: &std::path::Path) -> NativePath {
    NativePath::from_os_str(path.as_os_str())
}

fn create_options() -> OpenOptions {
    OpenOptions {
        create_if_missing: true,
        error_if_exists: false,
    }
}

#[test]
fn open_at_fresh_path_creates_store_and_yields_usable_handle() {
    init_tracing();
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("data").join("main");

    let opener = StoreOpener::new(MarkerEngine, target.clone(), create_options());
    let handle = opener.open().unwrap();

    assert_eq!(handle.directory(), &target);
    assert!(handle.is_live());
    assert!(Dir::exists(&target));
    assert!(File::exists(&handle.marker_path()));
}

#[test]
fn reopen_with_error_if_exists_fails_already_exists() {
    init_tracing();
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("store");

    StoreOpener::new(MarkerEngine, target.clone(), create_options())
        .open()
        .unwrap();

    let strict = OpenOptions {
        create_if_missing: true,
        error_if_exists: true,
    };
    let err = StoreOpener::new(MarkerEngine, target, strict).open().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert!(err.message().contains("store already exists"));
    assert!(err.message().contains("failed to open store"));
}

#[test]
fn open_without_create_if_missing_fails_not_found() {
    init_tracing();
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("absent");

    let err = StoreOpener::new(MarkerEngine, target, OpenOptions::default())
        .open()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn clearing_opener_succeeds_where_strict_reopen_fails() {
    init_tracing();
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("store");

    StoreOpener::new(MarkerEngine, target.clone(), create_options())
        .open()
        .unwrap();

    // Strict reopen refuses the leftover store; the clearing variant wipes
    // it first and gets a fresh one.
    let strict = OpenOptions {
        create_if_missing: true,
        error_if_exists: true,
    };
    assert_eq!(
        StoreOpener::new(MarkerEngine, target.clone(), strict)
            .open()
            .unwrap_err()
            .kind(),
        ErrorKind::AlreadyExists
    );

    let handle = StoreOpener::with_ensurer(MarkerEngine, ClearingEnsurer, target, strict)
        .open()
        .unwrap();
    assert!(handle.is_live());
}

#[test]
fn scratch_helpers_isolate_runs() {
    init_tracing();
    let scratch = scratch_dir("depot-store-testing");
    clear_scratch(&scratch).unwrap();
    assert!(!Dir::exists(&scratch));

    let handle = StoreOpener::new(MarkerEngine, scratch.clone(), create_options())
        .open()
        .unwrap();
    assert!(handle.is_live());

    clear_scratch(&scratch).unwrap();
    assert!(!Dir::exists(&scratch));
}

#[test]
fn failed_open_renders_kind_and_annotation_chain() {
    init_tracing();
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("absent");

    let result = StoreOpener::new(MarkerEngine, target, OpenOptions::default()).open();
    let rendered = result.render();

    assert!(rendered.starts_with("Not found: "));
    assert!(rendered.contains("; failed to open store at "));
}
