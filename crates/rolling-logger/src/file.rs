//! Size-rotated log file set.
//!
//! `<name>.log` is the live file; `<name>.1.log` is the most recent backup,
//! up to `<name>.<max_files - 1>.log`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct RollingFile {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    size: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            max_bytes,
            max_files: max_files.max(1),
            file,
            size,
        })
    }

    pub fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.name))
        } else {
            self.dir.join(format!("{}.{}.log", self.name, index))
        }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Shift backups up by one, dropping the oldest, and start a fresh live file.
    pub fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files > 1 {
            let oldest = self.path(self.max_files - 1);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (0..self.max_files - 1).rev() {
                let from = self.path(index);
                if from.exists() {
                    fs::rename(&from, self.path(index + 1))?;
                }
            }
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.path(0))?;
        self.size = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.size > 0 && self.size + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rotates_when_full() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 16, 3).unwrap();

        file.write_all(b"0123456789\n").unwrap();
        file.write_all(b"abcdefghij\n").unwrap();

        assert!(file.path(1).exists());
        assert_eq!(fs::read_to_string(file.path(1)).unwrap(), "0123456789\n");
        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "abcdefghij\n");
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 4, 3).unwrap();

        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            file.write_all(line.as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "dddd");
        assert_eq!(fs::read_to_string(file.path(1)).unwrap(), "cccc");
        assert_eq!(fs::read_to_string(file.path(2)).unwrap(), "bbbb");
        assert!(!file.path(3).exists());
    }

    #[test]
    fn test_single_file_truncates() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 4, 1).unwrap();
        file.write_all(b"aaaa").unwrap();
        file.write_all(b"bb").unwrap();

        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "bb");
        assert!(!file.path(1).exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
            file.write_all(b"first\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
        assert_eq!(file.size(), 6);
        file.write_all(b"second\n").unwrap();
        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "first\nsecond\n");
    }
}
