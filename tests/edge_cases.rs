//! Edge case and error handling tests for fsview


use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;

use fsview::{FsLister, LazyTree, TreeRenderer};
use harness::{TestDir, run_fsview};

/// Remove all permissions from `path`. Returns false when the directory is
/// still readable afterwards (running as root), in which case the caller
/// should skip its assertions.
fn lock_dir(path: &Path) -> bool {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
    fs::read_dir(path).is_err()
}

fn unlock_dir(path: &Path) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to restore permissions");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_subdirectory_renders_connector_only() {
    let dir = TestDir::new();
    dir.add_file("locked/secret.txt", "");
    dir.add_file("open/visible.txt", "");
    dir.add_file("z.txt", "");
    let locked = dir.path().join("locked");

    if !lock_dir(&locked) {
        unlock_dir(&locked);
        return;
    }
    let out = TreeRenderer::new(FsLister).render(&dir.path());
    unlock_dir(&locked);

    assert_eq!(
        out,
        "root/\n├── locked\n├── open\n│   └── visible.txt\n└── z.txt"
    );
}

#[test]
fn test_unreadable_subdirectory_expands_empty() {
    let dir = TestDir::new();
    dir.add_file("locked/secret.txt", "");
    let locked = dir.path().join("locked");

    if !lock_dir(&locked) {
        unlock_dir(&locked);
        return;
    }
    let mut tree = LazyTree::new(FsLister);
    let root = tree.load_root(&dir.path());
    let locked_id = tree.find_child(root, "locked").unwrap();
    tree.expand(locked_id);
    unlock_dir(&locked);

    assert!(tree.children(locked_id).is_empty());
    assert!(tree.node(locked_id).unwrap().is_loaded());
}

#[test]
fn test_unreadable_root_exports_nothing() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");
    let root = dir.path();

    if !lock_dir(&root) {
        unlock_dir(&root);
        return;
    }
    let out = TreeRenderer::new(FsLister).render(&root);
    unlock_dir(&root);

    assert_eq!(out, "");
}

#[test]
fn test_unreadable_root_fails_export() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");
    let root = dir.path();
    let parent = root.parent().unwrap();

    if !lock_dir(&root) {
        unlock_dir(&root);
        return;
    }
    let text = run_fsview(parent, &["export", "root"]);
    let json = run_fsview(parent, &["export", "--json", "root"]);
    unlock_dir(&root);

    for (stdout, stderr, success) in [text, json] {
        assert!(!success);
        assert!(stdout.is_empty(), "stdout: {}", stdout);
        assert!(stderr.contains("cannot read"), "stderr: {}", stderr);
        assert!(!stderr.contains("no such directory"), "stderr: {}", stderr);
    }
}

// ============================================================================
// Names and Symlinks
// ============================================================================

#[test]
fn test_unicode_and_space_names() {
    let dir = TestDir::new();
    dir.add_file("my docs/résumé.txt", "");
    dir.add_file("日本.txt", "");

    let out = TreeRenderer::new(FsLister).render(&dir.path());
    assert_eq!(out, "root/\n├── my docs\n│   └── résumé.txt\n└── 日本.txt");
}

#[test]
fn test_non_utf8_directory_name_is_traversed() {
    let dir = TestDir::new();
    let raw = OsStr::from_bytes(b"bad\xffname");
    let bad = dir.path().join(raw);
    // Some filesystems reject names that are not valid UTF-8.
    if fs::create_dir(&bad).is_err() {
        return;
    }
    fs::write(bad.join("inner.txt"), "").unwrap();

    let out = TreeRenderer::new(FsLister).render(&dir.path());
    assert_eq!(out, "root/\n└── bad\u{FFFD}name\n    └── inner.txt");

    let mut tree = LazyTree::new(FsLister);
    let root = tree.load_root(&dir.path());
    let bad_id = tree.find_child(root, raw).unwrap();
    tree.expand(bad_id);
    assert_eq!(tree.children(bad_id).len(), 1);

    let path = tree.resolved_path(bad_id).unwrap();
    assert_eq!(path, bad);
    assert!(path.is_dir());

    let inner = tree.resolve_relative(&Path::new(raw).join("inner.txt")).unwrap();
    assert!(tree.resolved_path(inner).unwrap().is_file());
}

#[test]
fn test_names_differing_only_in_case() {
    let dir = TestDir::new();
    dir.add_file("readme", "");
    dir.add_file("README", "");

    let out = TreeRenderer::new(FsLister).render(&dir.path());
    // Case-insensitive filesystems collapse these into one entry.
    let entries = fs::read_dir(dir.path()).unwrap().count();
    if entries == 2 {
        assert_eq!(out, "root/\n├── README\n└── readme");
    }
}

#[test]
fn test_symlink_to_directory_is_listed_as_directory() {
    let dir = TestDir::new();
    dir.add_file("real/file.txt", "");
    symlink(dir.path().join("real"), dir.path().join("link")).expect("Failed to create symlink");

    let out = TreeRenderer::new(FsLister).render(&dir.path());
    assert_eq!(
        out,
        "root/\n├── link\n│   └── file.txt\n└── real\n    └── file.txt"
    );
}

#[test]
fn test_broken_symlink_is_a_file() {
    let dir = TestDir::new();
    symlink("nonexistent", dir.path().join("broken")).expect("Failed to create symlink");
    dir.add_dir("sub");

    let out = TreeRenderer::new(FsLister).render(&dir.path());
    assert_eq!(out, "root/\n├── sub\n└── broken");
}

#[test]
fn test_symlink_cycle_with_depth_limit_terminates() {
    let dir = TestDir::new();
    dir.add_dir("sub");
    symlink("..", dir.path().join("sub").join("up")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_fsview(&dir.path(), &["export", "-L", "3"]);
    assert!(success);
    assert_eq!(
        stdout,
        "root/\n└── sub\n    └── up\n        └── sub\n"
    );
}

#[test]
fn test_export_file_instead_of_folder() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "");
    let (_stdout, stderr, success) = run_fsview(&dir.path(), &["export", "plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("cannot access"));
}

#[test]
fn test_max_entries_truncates() {
    let dir = TestDir::new();
    for i in 0..5 {
        dir.add_file(&format!("f{}.txt", i), "");
    }
    let (stdout, stderr, success) =
        run_fsview(&dir.path(), &["export", "--max-entries", "2"]);
    assert!(success);
    assert_eq!(stdout, "root/\n├── f0.txt\n├── f1.txt\n");
    assert!(stderr.contains("truncated"), "stderr: {}", stderr);
}

#[test]
fn test_max_entries_equal_to_total_does_not_warn() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");
    dir.add_file("b.txt", "");
    let (stdout, stderr, success) =
        run_fsview(&dir.path(), &["export", "--max-entries", "2"]);
    assert!(success);
    assert_eq!(stdout, "root/\n├── a.txt\n└── b.txt\n");
    assert!(!stderr.contains("truncated"), "stderr: {}", stderr);
}
