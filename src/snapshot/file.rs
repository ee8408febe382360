//! Snapshot file I/O

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Read a snapshot file into memory
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Write `data` to `path` through a temporary sibling and a rename
///
/// The temporary file is removed if any step fails.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let tmp = temp_path(path)?;

    let written = (|| -> io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    Ok(written?)
}

/// `<dir>/<name>.tmp` for `<dir>/<name>`
fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let mut name = path
        .file_name()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("snapshot path has no file name: {}", path.display()),
            )
        })?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
