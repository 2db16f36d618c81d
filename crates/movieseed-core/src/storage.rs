//! File copies for seeded videos.
//!
//! Data goes to `<dest>.part` first; timestamps and permissions are copied from
//! the source, then the temp file is renamed onto the final name. A final name
//! therefore always holds a complete copy, and a `.part` left by an interrupted
//! run is simply overwritten next time.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `x.mp4` → `x.mp4.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Copy `source` to `dest`, preserving permissions and access/modification times.
///
/// Returns the number of bytes copied. On error the temp file is removed and
/// `dest` is left untouched. Both handles are closed before the rename.
pub fn copy_with_metadata(source: &Path, dest: &Path) -> io::Result<u64> {
    let part = temp_path(dest);
    match write_part(source, &part) {
        Ok(bytes) => {
            fs::rename(&part, dest)?;
            Ok(bytes)
        }
        Err(e) => {
            match fs::remove_file(&part) {
                Ok(()) => {}
                Err(rm) if rm.kind() == io::ErrorKind::NotFound => {}
                Err(rm) => {
                    tracing::warn!(path = %part.display(), "could not remove temp file: {}", rm)
                }
            }
            Err(e)
        }
    }
}

fn write_part(source: &Path, part: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    let meta = reader.metadata()?;
    let mut writer = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(part)?;

    let bytes = io::copy(&mut reader, &mut writer)?;

    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times)?;
    writer.set_permissions(meta.permissions())?;
    writer.sync_all()?;
    Ok(bytes)
}
