use std::fs;
use std::io;
use std::path::Path;

/// Trait for reading and writing whole text files
pub trait FileSystem {
    fn read(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Local filesystem implementation.
///
/// Writes truncate the file in place. There is no temp file renamed over the
/// target, so a read-only file stays read-only and the write fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}
