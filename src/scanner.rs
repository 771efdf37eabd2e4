//! Recursive discovery of candidate files

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory swept by the binary, relative to the working directory
pub const TARGET_ROOT: &str = "components";

/// Only files whose name ends with this suffix are touched
pub const TARGET_EXTENSION: &str = ".tsx";

/// One step of the walk: either a matching file or an entry the walk could not read
#[derive(Debug)]
pub enum ScanEntry {
    File(PathBuf),
    Unreadable {
        path: Option<PathBuf>,
        error: walkdir::Error,
    },
}

/// Walks a tree and yields files whose name ends with a fixed suffix
pub struct Scanner {
    root: PathBuf,
    extension: String,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Case-sensitive suffix check on the file name, not the whole path.
    ///
    /// Compared as raw bytes so names that are not valid UTF-8 still match.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(self.extension.as_bytes()))
    }

    /// Lazily walk the tree.
    ///
    /// Symlinked directories are not descended, but a symlink whose target is
    /// a regular file is yielded like any other file. No directory is excluded.
    /// Entries are sorted by name so runs are reproducible.
    pub fn entries(&self) -> impl Iterator<Item = ScanEntry> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if is_regular_file(&entry) && self.matches(entry.path()) {
                        Some(ScanEntry::File(entry.into_path()))
                    } else {
                        None
                    }
                }
                Err(error) => {
                    // A missing root is an empty sweep, not an error
                    if error.depth() == 0 && is_not_found(&error) {
                        return None;
                    }
                    Some(ScanEntry::Unreadable {
                        path: error.path().map(Path::to_path_buf),
                        error,
                    })
                }
            })
    }
}

fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_not_found(error: &walkdir::Error) -> bool {
    error
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(TARGET_ROOT, TARGET_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn files(scanner: &Scanner) -> Vec<PathBuf> {
        scanner
            .entries()
            .filter_map(|e| match e {
                ScanEntry::File(p) => Some(p),
                ScanEntry::Unreadable { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_matches_suffix_case_sensitive() {
        let scanner = Scanner::default();
        assert!(scanner.matches(Path::new("components/button.tsx")));
        assert!(!scanner.matches(Path::new("components/button.TSX")));
        assert!(!scanner.matches(Path::new("components/button.ts")));
        assert!(!scanner.matches(Path::new("components/button.tsx.bak")));
    }

    #[test]
    fn test_matches_ignores_parent_directories() {
        let scanner = Scanner::default();
        assert!(!scanner.matches(Path::new("legacy.tsx/readme.md")));
        assert!(!scanner.matches(Path::new("components.tsx/..")));
    }

    #[cfg(unix)]
    #[test]
    fn test_matches_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let scanner = Scanner::default();
        let name = OsStr::from_bytes(b"caf\xe9.tsx");
        assert!(scanner.matches(&Path::new("components").join(name)));
        assert!(!scanner.matches(Path::new(OsStr::from_bytes(b"caf\xe9.ts"))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_walk_yields_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.tsx"));
        fs::write(&path, "").unwrap();

        assert_eq!(files(&Scanner::new(dir.path(), ".tsx")), vec![path]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_yielded_symlinked_dir_is_not_descended() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let outside = dir.path().join("outside");
        let root = dir.path().join("root");
        fs::create_dir_all(outside.join("shared")).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(outside.join("real.tsx"), "").unwrap();
        fs::write(outside.join("shared/inner.tsx"), "").unwrap();
        symlink(outside.join("real.tsx"), root.join("link.tsx")).unwrap();
        symlink(outside.join("shared"), root.join("shared")).unwrap();
        symlink(outside.join("missing.tsx"), root.join("dangling.tsx")).unwrap();

        let found = files(&Scanner::new(&root, ".tsx"));
        assert_eq!(found, vec![root.join("link.tsx")]);
    }

    #[test]
    fn test_walk_is_recursive_without_exclusions() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ui/forms")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("a.tsx"), "").unwrap();
        fs::write(root.join("ui/forms/b.tsx"), "").unwrap();
        fs::write(root.join("node_modules/pkg/c.tsx"), "").unwrap();
        fs::write(root.join("ui/style.css"), "").unwrap();

        let scanner = Scanner::new(root, ".tsx");
        let found = files(&scanner);

        assert_eq!(found.len(), 3);
        assert!(found.contains(&root.join("a.tsx")));
        assert!(found.contains(&root.join("ui/forms/b.tsx")));
        assert!(found.contains(&root.join("node_modules/pkg/c.tsx")));
    }

    #[test]
    fn test_directory_with_matching_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("odd.tsx")).unwrap();
        fs::write(dir.path().join("odd.tsx/inner.tsx"), "").unwrap();

        let found = files(&Scanner::new(dir.path(), ".tsx"));
        assert_eq!(found, vec![dir.path().join("odd.tsx/inner.tsx")]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let scanner = Scanner::new(dir.path().join("does-not-exist"), ".tsx");
        assert_eq!(scanner.entries().count(), 0);
    }
}
