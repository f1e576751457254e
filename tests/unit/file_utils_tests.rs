/*!
 * Tests for file utility functions
 */

use std::fs;

use i18n_bundler::file_utils::FileManager;

use crate::common::create_temp_dir;

/// Test bundle path construction
#[test]
fn test_bundle_path_shouldAppendLocaleAndExtension() {
    let path = FileManager::bundle_path("messages", "uk");
    assert_eq!(path, std::path::PathBuf::from("messages/uk.json"));
}

/// Test file existence checks distinguish files from directories
#[test]
fn test_file_exists_shouldRejectMissingPathsAndDirectories() {
    let temp_dir = create_temp_dir().unwrap();
    let file = temp_dir.path().join("en.json");

    assert!(!FileManager::file_exists(&file));
    fs::write(&file, "{}").unwrap();
    assert!(FileManager::file_exists(&file));

    // A directory is not a file
    assert!(!FileManager::file_exists(temp_dir.path()));
}

/// Test atomic writes create and overwrite files
#[test]
fn test_write_atomic_shouldCreateAndOverwrite() {
    let temp_dir = create_temp_dir().unwrap();
    let target = temp_dir.path().join("pl.json");

    FileManager::write_atomic(&target, "{\"a\":1}").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "{\"a\":1}");

    FileManager::write_atomic(&target, "{\"a\":2}").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "{\"a\":2}");
}

/// Test atomic writes create a missing parent directory
#[test]
fn test_write_atomic_withMissingParent_shouldCreateDirectory() {
    let temp_dir = create_temp_dir().unwrap();
    let target = temp_dir.path().join("nested").join("messages").join("uk.json");

    FileManager::write_atomic(&target, "{}").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
}

/// Test a blocked target path fails without leaving stray content
#[test]
fn test_write_atomic_withDirectoryTarget_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let target = temp_dir.path().join("de.json");
    fs::create_dir(&target).unwrap();

    assert!(FileManager::write_atomic(&target, "{}").is_err());
    // The target is still the directory, untouched
    assert!(target.is_dir());
}

/// Test directory creation is recursive and idempotent
#[test]
fn test_ensure_dir_shouldCreateNestedDirectories() {
    let temp_dir = create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    assert!(!nested.is_dir());
    FileManager::ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());

    // Idempotent
    FileManager::ensure_dir(&nested).unwrap();
}
