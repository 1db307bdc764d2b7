//! Filesystem-state assertions around recursive create/delete, using
//! assert_fs fixtures so leftovers are caught by path predicates rather than
//! manual exists() checks.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use depot_fs::{Dir, NativePath};
use predicates::prelude::*;

fn native(path: &std::path::Path) -> NativePath {
    NativePath::from_os_str(path.as_os_str())
}

#[test]
fn recursive_create_leaves_expected_tree() {
    let temp = TempDir::new().unwrap();
    let target = native(temp.path()).join("a").join("b").join("c");

    Dir::recursively_create(&target).unwrap();

    temp.child("a").assert(predicate::path::is_dir());
    temp.child("a/b").assert(predicate::path::is_dir());
    temp.child("a/b/c").assert(predicate::path::is_dir());
}

#[test]
fn recursive_delete_leaves_nothing_behind() {
    let temp = TempDir::new().unwrap();
    temp.child("store/a/deep/file.txt").write_str("payload").unwrap();
    temp.child("store/top.txt").write_str("payload").unwrap();
    temp.child("store/empty-dir").create_dir_all().unwrap();

    Dir::recursively_delete(&native(temp.path()).join("store")).unwrap();

    temp.child("store").assert(predicate::path::missing());
}

#[test]
fn recursive_delete_only_consumes_its_subtree() {
    let temp = TempDir::new().unwrap();
    temp.child("keep/file.txt").write_str("keep me").unwrap();
    temp.child("drop/file.txt").write_str("drop me").unwrap();

    Dir::recursively_delete(&native(temp.path()).join("drop")).unwrap();

    temp.child("drop").assert(predicate::path::missing());
    temp.child("keep/file.txt").assert(predicate::path::exists());
}
