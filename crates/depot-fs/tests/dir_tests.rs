use depot_fs::{Dir, File, FsConfig, NativePath};
use depot_status::ErrorKind;
use tempfile::tempdir;

fn native(path: &std::path::Path) -> NativePath {
    NativePath::from_os_str(path.as_os_str())
}

#[test]
fn create_succeeds_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("sub");

    assert!(Dir::create(&target).is_ok());
    assert!(Dir::exists(&target));
    // Already existing is a success, not AlreadyExists.
    assert!(Dir::create(&target).is_ok());
}

#[test]
fn create_with_missing_parent_fails_not_found() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("missing").join("sub");

    let err = Dir::create(&target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.message().contains("Could not create directory"));
}

#[test]
fn recursively_create_builds_all_intermediate_directories() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("a").join("b").join("c");

    assert!(Dir::recursively_create(&target).is_ok());
    assert!(Dir::exists(&target));
    assert!(Dir::exists(&native(dir.path()).join("a").join("b")));
}

#[test]
fn recursively_create_is_idempotent() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("a").join("b").join("c");

    assert!(Dir::recursively_create(&target).is_ok());
    assert!(Dir::recursively_create(&target).is_ok());
}

#[test]
fn recursively_create_propagates_non_not_found_failures() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("plain");
    std::fs::write(&file_path, b"not a directory").unwrap();

    // A file blocking the parent chain is not fixed by recursing.
    let target = native(&file_path).join("child");
    let err = Dir::recursively_create(&target).unwrap_err();
    assert_ne!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_of_missing_directory_is_success() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("never-created");
    assert!(Dir::delete(&target).is_ok());
}

#[test]
fn delete_of_non_empty_directory_fails() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("full");
    Dir::create(&target).unwrap();
    std::fs::write(target.join("f").as_std_path(), b"x").unwrap();

    let err = Dir::delete(&target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
}

#[test]
fn recursively_delete_missing_path_is_success() {
    let dir = tempdir().unwrap();
    let target = native(dir.path()).join("nothing-here");
    assert!(Dir::recursively_delete(&target).is_ok());
}

#[test]
fn recursively_delete_removes_files_and_subdirectories() {
    let dir = tempdir().unwrap();
    let root = native(dir.path()).join("tree");
    let nested = root.join("x").join("y");
    Dir::recursively_create(&nested).unwrap();
    std::fs::write(root.join("top.txt").as_std_path(), b"1").unwrap();
    std::fs::write(nested.join("leaf.txt").as_std_path(), b"2").unwrap();

    assert!(Dir::recursively_delete(&root).is_ok());
    assert!(!File::exists(&root));
}

#[test]
fn recursively_delete_of_plain_file_unlinks_it() {
    let dir = tempdir().unwrap();
    let file = native(dir.path()).join("single.txt");
    std::fs::write(file.as_std_path(), b"x").unwrap();

    assert!(Dir::recursively_delete(&file).is_ok());
    assert!(!File::exists(&file));
}

#[test]
fn dir_exists_is_false_for_plain_file() {
    let dir = tempdir().unwrap();
    let file = native(dir.path()).join("f.txt");
    std::fs::write(file.as_std_path(), b"x").unwrap();

    assert!(File::exists(&file));
    assert!(!Dir::exists(&file));
}

#[test]
fn is_directory_reports_not_found_detail() {
    let dir = tempdir().unwrap();
    let missing = native(dir.path()).join("gone");

    let err = File::is_directory(&missing).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.message().contains("Could not stat file"));
}

#[test]
fn is_directory_distinguishes_files_from_directories() {
    let dir = tempdir().unwrap();
    let file = native(dir.path()).join("f.txt");
    std::fs::write(file.as_std_path(), b"x").unwrap();

    assert!(!File::is_directory(&file).unwrap());
    assert!(File::is_directory(&native(dir.path())).unwrap());
}

#[test]
fn file_delete_of_missing_file_fails_not_found() {
    let dir = tempdir().unwrap();
    let missing = native(dir.path()).join("gone.txt");

    let err = File::delete(&missing).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn temp_dir_resolves_to_usable_directory() {
    let config = FsConfig::resolve();
    assert!(!config.temp_dir().is_empty());
    assert!(Dir::exists(config.temp_dir()));
}

#[test]
fn temp_dir_can_be_fixed_explicitly() {
    let fixed = NativePath::from_utf8("/custom/scratch");
    let config = FsConfig::with_temp_dir(fixed.clone());
    assert_eq!(config.temp_dir(), &fixed);
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn is_directory_surfaces_permission_denied() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let locked = native(dir.path()).join("locked");
        Dir::create(&locked).unwrap();
        let probe = locked.join("inner");
        Dir::create(&probe).unwrap();

        fs::set_permissions(locked.as_std_path(), Permissions::from_mode(0o000)).unwrap();
        let result = File::is_directory(&probe);
        let _ = fs::set_permissions(locked.as_std_path(), Permissions::from_mode(0o755));

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }

    #[test]
    fn recursively_create_propagates_permission_denied() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let readonly = native(dir.path()).join("readonly");
        Dir::create(&readonly).unwrap();
        fs::set_permissions(readonly.as_std_path(), Permissions::from_mode(0o555)).unwrap();

        let target = readonly.join("a").join("b");
        let result = Dir::recursively_create(&target);
        let _ = fs::set_permissions(readonly.as_std_path(), Permissions::from_mode(0o755));

        assert_eq!(result.unwrap_err().kind(), ErrorKind::PermissionDenied);
    }
}
