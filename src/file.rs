//! File entries and directory tree discovery.
//!
//! A [`File`] pairs the absolute path of a visited file with its path
//! relative to the walk root. [`File::discover`] produces them by walking
//! the tree top-down: the files of a directory come before anything inside
//! its subdirectories.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use crate::exclusion::ExclusionSet;

/// A single non-directory entry found under the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Absolute path, as produced by the walker.
    path: PathBuf,

    /// `path` with the root prefix stripped.
    relative: PathBuf,
}

impl File {
    /// Creates an entry for `path`, which must lie under `root`.
    pub fn new(root: &Path, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("{} is not under {}", path.display(), root.display()))?
            .to_path_buf();

        Ok(Self { path, relative })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Final path component, used for the diagnostic line and exclusion.
    #[inline]
    pub fn name(&self) -> &OsStr {
        self.path.file_name().unwrap_or(self.path.as_os_str())
    }

    #[inline]
    pub fn is_excluded(&self, exclusions: &ExclusionSet) -> bool {
        exclusions.matches(self.name())
    }

    /// Reads the whole file and decodes it as UTF-8.
    ///
    /// The handle is opened and closed inside this call whether the read
    /// succeeds or not. The content is returned byte-for-byte; line endings
    /// are not translated.
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Walks `root` recursively and yields every file entry beneath it.
    ///
    /// Symlinks are never followed into directories. A symlink to a file, or
    /// a dangling one, is yielded like a regular file. With `sorted`, the
    /// entries of each directory are ordered by name; otherwise they keep
    /// the order the platform lists them in.
    ///
    /// Errors from the walk itself (an unlistable directory, a vanished
    /// root) are yielded as `Err` for the caller to propagate.
    pub fn discover(root: &Path, sorted: bool) -> impl Iterator<Item = Result<Self>> + use<> {
        let root = root.to_path_buf();

        WalkDir::new(&root)
            .min_depth(1)
            .sort_by(move |a, b| entry_order(a, b, sorted))
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if is_file_entry(&entry) => Some(Self::new(&root, entry.into_path())),
                Ok(_) => None,
                Err(err) => Some(Err::<Self, _>(err).context("directory traversal failed")),
            })
    }
}

/// Files before directories; by name only when `sorted`.
///
/// The walker sorts with a stable sort, so unsorted listings keep their
/// platform order within each group.
fn entry_order(a: &DirEntry, b: &DirEntry, sorted: bool) -> Ordering {
    let order = a.file_type().is_dir().cmp(&b.file_type().is_dir());
    if sorted { order.then_with(|| a.file_name().cmp(b.file_name())) } else { order }
}

fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }

    // `Path::is_dir` follows the link; a dangling link reports false.
    !(file_type.is_symlink() && entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn relative_paths(root: &Path, sorted: bool) -> Vec<PathBuf> {
        File::discover(root, sorted).map(|file| file.unwrap().relative().to_path_buf()).collect()
    }

    #[test]
    fn test_new_strips_root() {
        let file = File::new(Path::new("/work"), "/work/sub/c.md").unwrap();
        assert_eq!(file.path(), Path::new("/work/sub/c.md"));
        assert_eq!(file.relative(), Path::new("sub/c.md"));
        assert_eq!(file.name(), "c.md");
    }

    #[test]
    fn test_new_outside_root() {
        assert!(File::new(Path::new("/work"), "/elsewhere/a.txt").is_err());
    }

    #[test]
    fn test_is_excluded() {
        let exclusions = ExclusionSet::default();
        let jar = File::new(Path::new("/work"), "/work/libs/Guava.JAR").unwrap();
        let txt = File::new(Path::new("/work"), "/work/a.jar/readme.txt").unwrap();

        assert!(jar.is_excluded(&exclusions));
        assert!(!txt.is_excluded(&exclusions));
    }

    #[test]
    fn test_read_text() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("crlf.txt"), "one\r\ntwo\r\n").unwrap();

        let file = File::new(dir.path(), dir.path().join("crlf.txt")).unwrap();
        assert_eq!(file.read_text().unwrap(), "one\r\ntwo\r\n");
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let file = File::new(dir.path(), dir.path().join("bad.txt")).unwrap();
        assert!(file.read_text().is_err());
    }

    #[test]
    fn test_read_text_missing() {
        let dir = tempdir().unwrap();
        let file = File::new(dir.path(), dir.path().join("gone.txt")).unwrap();
        assert!(file.read_text().is_err());
    }

    #[test]
    fn test_discover_empty() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();

        assert!(relative_paths(dir.path(), false).is_empty());
    }

    #[test]
    fn test_discover_sorted_files_first() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/nested")).unwrap();
        fs::write(dir.path().join("z.txt"), "z").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a/y.txt"), "y").unwrap();
        fs::write(dir.path().join("a/nested/x.txt"), "x").unwrap();

        let expected: Vec<PathBuf> = ["b.txt", "z.txt", "a/y.txt", "a/nested/x.txt"].iter().map(PathBuf::from).collect();
        assert_eq!(relative_paths(dir.path(), true), expected);
    }

    #[test]
    fn test_discover_unsorted_same_set() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("one"), "1").unwrap();
        fs::write(dir.path().join("sub/two"), "2").unwrap();

        let mut unsorted = relative_paths(dir.path(), false);
        unsorted.sort();
        let mut sorted = relative_paths(dir.path(), true);
        sorted.sort();
        assert_eq!(unsorted, sorted);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/a.txt"), "a").unwrap();
        symlink(dir.path().join("real"), dir.path().join("linked_dir")).unwrap();
        symlink(dir.path().join("real/a.txt"), dir.path().join("linked_file")).unwrap();
        symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();

        let expected: Vec<PathBuf> = ["dangling", "linked_file", "real/a.txt"].iter().map(PathBuf::from).collect();
        assert_eq!(relative_paths(dir.path(), true), expected);
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = tempdir().unwrap();
        let mut files = File::discover(&dir.path().join("nope"), false);
        assert!(files.next().unwrap().is_err());
    }

    #[test]
    fn test_discover_outlives_root_borrow() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("kept.txt"), "k").unwrap();

        let files = {
            let root = dir.path().to_path_buf();
            File::discover(&root, true)
        };

        let names: Vec<PathBuf> = files.map(|file| file.unwrap().relative().to_path_buf()).collect();
        assert_eq!(names, [PathBuf::from("kept.txt")]);
    }
}
