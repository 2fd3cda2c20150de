/// End-to-end tests for `LazyTreeLoader`.
///
/// Ordering and failure behaviour are exercised through a scripted
/// `FileSystem` so the raw enumeration order is under the test's control;
/// the real-disk path is exercised against a `tempfile` directory.
use folderview_core::fs::{EnumerationError, FileSystem, LocalFileSystem};
use folderview_core::loader::{Expansion, LazyTreeLoader};
use folderview_core::model::{LoadState, NodeIndex, NodeKind};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// In-memory filesystem with a fixed listing per path.
///
/// Paths registered in `fail_dirs` / `fail_files` return an error for that
/// query; unknown paths list as empty.
#[derive(Default)]
struct ScriptedFs {
    volumes: Vec<String>,
    dirs: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<String>>,
    fail_dirs: HashSet<String>,
    fail_files: HashSet<String>,
}

impl ScriptedFs {
    fn with_volumes(volumes: &[&str]) -> Self {
        Self {
            volumes: volumes.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    fn dirs(mut self, path: &str, children: &[&str]) -> Self {
        self.dirs.insert(
            path.to_string(),
            children.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    fn files(mut self, path: &str, children: &[&str]) -> Self {
        self.files.insert(
            path.to_string(),
            children.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    fn fail_dirs(mut self, path: &str) -> Self {
        self.fail_dirs.insert(path.to_string());
        self
    }

    fn fail_files(mut self, path: &str) -> Self {
        self.fail_files.insert(path.to_string());
        self
    }
}

fn denied(path: &Path) -> EnumerationError {
    EnumerationError::ReadDir {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
    }
}

fn to_paths(listing: Option<&Vec<String>>) -> Vec<PathBuf> {
    listing
        .map(|items| items.iter().map(PathBuf::from).collect())
        .unwrap_or_default()
}

impl FileSystem for ScriptedFs {
    fn volumes(&self) -> Vec<PathBuf> {
        self.volumes.iter().map(PathBuf::from).collect()
    }

    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        let key = path.to_string_lossy();
        if self.fail_dirs.contains(&*key) {
            return Err(denied(path));
        }
        Ok(to_paths(self.dirs.get(&*key)))
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        let key = path.to_string_lossy();
        if self.fail_files.contains(&*key) {
            return Err(denied(path));
        }
        Ok(to_paths(self.files.get(&*key)))
    }
}

/// Find a root or loaded child by its full path.
fn find<F: FileSystem>(loader: &LazyTreeLoader<F>, path: impl AsRef<Path>) -> NodeIndex {
    let path = path.as_ref();
    loader
        .tree()
        .find_by_path(path)
        .unwrap_or_else(|| panic!("no node for {}", path.display()))
}

// ── Roots ────────────────────────────────────────────────────────────────────

#[test]
fn one_unloaded_root_per_volume_in_reported_order() {
    let fs = ScriptedFs::with_volumes(&["D:\\", "C:\\", "Z:\\"]);
    let mut loader = LazyTreeLoader::new(fs);
    let roots = loader.load_roots().to_vec();

    assert_eq!(roots.len(), 3);
    let tree = loader.tree();
    let labels: Vec<&str> = roots.iter().map(|&r| tree.node(r).name.as_str()).collect();
    assert_eq!(labels, vec!["D:\\", "C:\\", "Z:\\"]);

    for &root in &roots {
        let node = tree.node(root);
        assert_eq!(node.name, node.full_path.to_string_lossy());
        assert_eq!(node.kind, NodeKind::Drive);
        assert!(node.has_placeholder());
        assert!(node.children.is_empty());
        assert!(node.parent.is_none());
    }
}

#[test]
fn zero_volumes_yield_empty_roots() {
    let mut loader = LazyTreeLoader::new(ScriptedFs::default());
    assert!(loader.load_roots().is_empty());
    assert!(loader.tree().is_empty());
}

// ── Expansion ────────────────────────────────────────────────────────────────

#[test]
fn directories_then_files_in_reported_order() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .dirs("C:\\", &["C:\\D"])
        .dirs("C:\\D", &["C:\\D\\B", "C:\\D\\A"])
        .files("C:\\D", &["C:\\D\\z.txt", "C:\\D\\y.txt"]);
    let mut loader = LazyTreeLoader::with_roots(fs);

    let root = find(&loader, "C:\\");
    loader.expand(root);
    let d = find(&loader, "C:\\D");
    let outcome = loader.expand(d);

    assert_eq!(
        outcome,
        Expansion::Loaded {
            directories: 2,
            files: 2
        }
    );
    assert_eq!(loader.tree().child_names(d), vec!["B", "A", "z.txt", "y.txt"]);
}

#[test]
fn every_directory_precedes_every_file() {
    let fs = ScriptedFs::with_volumes(&["/"])
        .dirs("/", &["/usr", "/etc", "/var"])
        .files("/", &["/vmlinuz", "/initrd.img"]);
    let mut loader = LazyTreeLoader::with_roots(fs);
    let root = find(&loader, "/");
    loader.expand(root);

    let tree = loader.tree();
    let kinds: Vec<bool> = tree
        .children(root)
        .iter()
        .map(|&c| tree.node(c).is_dir())
        .collect();
    let first_file = kinds.iter().position(|is_dir| !is_dir).unwrap();
    assert!(kinds[..first_file].iter().all(|&d| d));
    assert!(kinds[first_file..].iter().all(|&d| !d));
    assert_eq!(first_file, 3);

    // A path whose only separator is the leading one is its own label.
    assert_eq!(
        tree.child_names(root),
        vec!["/usr", "/etc", "/var", "/vmlinuz", "/initrd.img"]
    );
}

#[test]
fn new_directories_are_unloaded_and_files_are_leaves() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .dirs("C:\\", &["C:\\Users", "C:\\Windows"])
        .files("C:\\", &["C:\\pagefile.sys"]);
    let mut loader = LazyTreeLoader::with_roots(fs);
    let root = find(&loader, "C:\\");
    loader.expand(root);

    let tree = loader.tree();
    assert_eq!(tree.node(root).load_state(), LoadState::Loaded);
    assert!(!tree.node(root).has_placeholder());

    for &child in tree.children(root) {
        let node = tree.node(child);
        assert_eq!(node.parent, Some(root));
        match node.kind {
            NodeKind::Directory => {
                assert!(
                    node.has_placeholder(),
                    "{} must be unloaded",
                    node.full_path.display()
                );
                assert!(node.children.is_empty());
            }
            NodeKind::File => {
                assert!(!node.is_expandable_hint());
                assert!(node.children.is_empty());
            }
            NodeKind::Drive => panic!("drives only appear as roots"),
        }
    }
    assert_eq!(tree.node(find(&loader, "C:\\Users")).name, "Users");
    assert_eq!(tree.node(find(&loader, "C:\\pagefile.sys")).name, "pagefile.sys");
}

#[test]
fn expand_twice_matches_expand_once() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .dirs("C:\\", &["C:\\A"])
        .files("C:\\", &["C:\\b.txt"]);
    let mut loader = LazyTreeLoader::with_roots(fs);
    let root = find(&loader, "C:\\");

    loader.expand(root);
    let once = loader.tree().children(root).to_vec();
    let len_once = loader.tree().len();

    assert_eq!(loader.expand(root), Expansion::Skipped);
    assert_eq!(loader.tree().children(root), once.as_slice());
    assert_eq!(loader.tree().len(), len_once);
}

#[test]
fn child_directories_expand_recursively() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .dirs("C:\\", &["C:\\Users"])
        .dirs("C:\\Users", &["C:\\Users\\alice"])
        .files("C:\\Users\\alice", &["C:\\Users\\alice\\notes.md"]);
    let mut loader = LazyTreeLoader::with_roots(fs);

    loader.expand(find(&loader, "C:\\"));
    loader.expand(find(&loader, "C:\\Users"));
    let alice = find(&loader, "C:\\Users\\alice");
    assert!(loader.tree().node(alice).has_placeholder());

    loader.expand(alice);
    assert_eq!(loader.tree().child_names(alice), vec!["notes.md"]);
}

// ── Failure handling ─────────────────────────────────────────────────────────

#[test]
fn failed_directory_listing_still_lists_files() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .fail_dirs("C:\\")
        .files("C:\\", &["C:\\boot.ini"]);
    let mut loader = LazyTreeLoader::with_roots(fs);
    let root = find(&loader, "C:\\");

    assert_eq!(
        loader.expand(root),
        Expansion::Loaded {
            directories: 0,
            files: 1
        }
    );
    assert_eq!(loader.tree().child_names(root), vec!["boot.ini"]);
}

#[test]
fn failed_file_listing_keeps_directories() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .dirs("C:\\", &["C:\\Temp"])
        .fail_files("C:\\");
    let mut loader = LazyTreeLoader::with_roots(fs);
    let root = find(&loader, "C:\\");
    loader.expand(root);

    assert_eq!(loader.tree().child_names(root), vec!["Temp"]);
}

#[test]
fn fully_unreadable_folder_loads_empty_and_stays_loaded() {
    let fs = ScriptedFs::with_volumes(&["C:\\"])
        .fail_dirs("C:\\")
        .fail_files("C:\\");
    let mut loader = LazyTreeLoader::with_roots(fs);
    let root = find(&loader, "C:\\");

    assert_eq!(
        loader.expand(root),
        Expansion::Loaded {
            directories: 0,
            files: 0
        }
    );
    let node = loader.tree().node(root);
    assert!(node.children.is_empty());
    assert!(!node.has_placeholder());
    assert!(!node.shows_arrow());
    assert_eq!(loader.expand(root), Expansion::Skipped);
}

// ── Real filesystem ──────────────────────────────────────────────────────────

/// Filesystem whose only volume is a temp directory; listings hit the disk.
struct TempVolume<'a> {
    root: &'a Path,
    local: LocalFileSystem,
}

impl FileSystem for TempVolume<'_> {
    fn volumes(&self) -> Vec<PathBuf> {
        vec![self.root.to_path_buf()]
    }

    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        self.local.list_directories(path)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        self.local.list_files(path)
    }
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// ```text
/// root/
///   alpha/
///     a.txt
///   beta/
///   d.zip
///   e.log
/// ```
fn build_test_tree(root: &Path) {
    fs::create_dir_all(root.join("alpha")).unwrap();
    fs::create_dir_all(root.join("beta")).unwrap();
    write_bytes(&root.join("alpha").join("a.txt"), 10);
    write_bytes(&root.join("d.zip"), 20);
    write_bytes(&root.join("e.log"), 30);
}

#[test]
fn expands_a_real_directory() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    let mut loader = LazyTreeLoader::with_roots(TempVolume {
        root: tmp.path(),
        local: LocalFileSystem::new(),
    });
    let root = loader.tree().roots[0];

    assert_eq!(
        loader.expand(root),
        Expansion::Loaded {
            directories: 2,
            files: 2
        }
    );

    let tree = loader.tree();
    let names = tree.child_names(root);
    let mut dir_names: Vec<&str> = names[..2].to_vec();
    let mut file_names: Vec<&str> = names[2..].to_vec();
    dir_names.sort();
    file_names.sort();
    assert_eq!(dir_names, vec!["alpha", "beta"]);
    assert_eq!(file_names, vec!["d.zip", "e.log"]);

    let alpha = tree.find_by_path(tmp.path().join("alpha")).unwrap();
    loader.expand(alpha);
    assert_eq!(loader.tree().child_names(alpha), vec!["a.txt"]);
}

#[test]
fn vanished_directory_loads_empty() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    let mut loader = LazyTreeLoader::with_roots(TempVolume {
        root: tmp.path(),
        local: LocalFileSystem::new(),
    });
    let root = loader.tree().roots[0];
    loader.expand(root);

    let beta = loader.tree().find_by_path(tmp.path().join("beta")).unwrap();
    fs::remove_dir(tmp.path().join("beta")).unwrap();

    assert_eq!(
        loader.expand(beta),
        Expansion::Loaded {
            directories: 0,
            files: 0
        }
    );
    assert!(loader.tree().children(beta).is_empty());
}

/// A folder whose name is not valid UTF-8 still opens: the label is lossy,
/// but the path handed back to the disk is the exact one that was listed.
#[cfg(target_os = "linux")]
#[test]
fn non_unicode_folder_names_still_expand() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let odd = tmp.path().join(OsStr::from_bytes(b"caf\xe9"));
    fs::create_dir(&odd).unwrap();
    write_bytes(&odd.join("inside.txt"), 5);

    let mut loader = LazyTreeLoader::with_roots(TempVolume {
        root: tmp.path(),
        local: LocalFileSystem::new(),
    });
    let root = loader.tree().roots[0];
    loader.expand(root);

    let child = loader.tree().children(root)[0];
    assert_eq!(loader.tree().node(child).full_path, odd);
    assert_eq!(loader.tree().node(child).name, "caf\u{FFFD}");

    assert_eq!(
        loader.expand(child),
        Expansion::Loaded {
            directories: 0,
            files: 1
        }
    );
    assert_eq!(loader.tree().child_names(child), vec!["inside.txt"]);
}
