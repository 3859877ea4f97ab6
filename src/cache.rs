use log::{debug, info};
use std::fs::{create_dir_all, metadata, File};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::Result;
use crate::fetch::Fetcher;

// Word lists persisted to a local directory, fetched on first use and never refreshed.
pub struct LocalCache<'a> {
  dir: PathBuf,
  fetcher: &'a dyn Fetcher,
}

impl<'a> LocalCache<'a> {
  pub fn new<P: AsRef<Path>>(dir: P, fetcher: &'a dyn Fetcher) -> Self {
    LocalCache {
      dir: dir.as_ref().to_path_buf(),
      fetcher,
    }
  }

  pub fn path_for(&self, file_name: &str) -> PathBuf {
    self.dir.join(file_name)
  }

  pub fn load_words(&self, file_name: &str) -> Result<Vec<String>> {
    let path = self.path_for(file_name);

    // Only a missing file is a miss; any other stat failure is surfaced rather than refetched.
    match metadata(&path) {
      Ok(_) => debug!("cache hit for '{}' at {:?}", file_name, path),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        info!("cache miss for '{}', fetching", file_name);
        let bytes = self.fetcher.fetch(file_name)?;
        self.store(&path, &bytes)?;
      }
      Err(e) => return Err(e.into()),
    }

    read_lines(&path)
  }

  // The list is staged in the cache directory and renamed into place so readers never observe a
  // partial file. A concurrent writer may still replace it with identical content.
  fn store(&self, path: &Path, bytes: &[u8]) -> Result<()> {
    create_dir_all(&self.dir)?;

    let mut staged = NamedTempFile::new_in(&self.dir)?;
    staged.write_all(bytes)?;
    readable_by_all(staged.as_file())?;
    staged.persist(path).map_err(|e| e.error)?;

    debug!("wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
  }
}

// Staged files start out owner-only; cached lists are opened up to 0644 like any plain file.
#[cfg(unix)]
fn readable_by_all(file: &File) -> Result<()> {
  use std::fs::Permissions;
  use std::os::unix::fs::PermissionsExt;

  file.set_permissions(Permissions::from_mode(0o644))?;
  Ok(())
}

#[cfg(not(unix))]
fn readable_by_all(_file: &File) -> Result<()> {
  Ok(())
}

// Lines are split on `\n` with a trailing `\r` dropped. Bytes that are not utf-8 are replaced
// rather than rejected.
fn read_lines(path: &Path) -> Result<Vec<String>> {
  let reader = BufReader::new(File::open(path)?);
  let mut lines = Vec::new();

  for line in reader.split(b'\n') {
    let bytes = line?;
    let trimmed = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
    lines.push(String::from_utf8_lossy(trimmed).into_owned());
  }

  Ok(lines)
}
