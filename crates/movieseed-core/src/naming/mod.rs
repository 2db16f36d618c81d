//! Folder and file naming for catalog entries.
//!
//! Derives the on-disk folder name from a display title and rejects names that
//! cannot be used as a path component.

mod sanitize;

pub use sanitize::sanitize_filename;

use crate::storage::TEMP_SUFFIX;
use thiserror::Error;

/// Linux NAME_MAX: longest single path component, in bytes.
pub const NAME_MAX: usize = 255;

/// Why a title cannot be turned into a folder name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("title sanitizes to an empty name")]
    Empty,
    /// `len` counts the `.part` suffix the copy is staged under.
    #[error("file name {name:?} needs {len} bytes while copying, over the 255-byte limit")]
    TooLong { name: String, len: usize },
}

/// Builds `<name>.<extension>`; a leading `.` on `extension` is ignored.
pub fn video_file_name(name: &str, extension: &str) -> String {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        name.to_string()
    } else {
        format!("{name}.{ext}")
    }
}

/// Sanitized folder name for `title`, checked to be usable alongside a video file
/// with the given extension, including the temp name that file is copied under.
pub fn folder_name(title: &str, extension: &str) -> Result<String, NamingError> {
    let name = sanitize_filename(title);
    if name.is_empty() {
        return Err(NamingError::Empty);
    }
    let file = video_file_name(&name, extension);
    let staged_len = file.len() + TEMP_SUFFIX.len();
    if staged_len > NAME_MAX {
        return Err(NamingError::TooLong {
            len: staged_len,
            name: file,
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_file_name_appends_extension() {
        assert_eq!(video_file_name("Roma (2018)", "mp4"), "Roma (2018).mp4");
        assert_eq!(video_file_name("Roma (2018)", ".mkv"), "Roma (2018).mkv");
        assert_eq!(video_file_name("Roma (2018)", ""), "Roma (2018)");
    }

    #[test]
    fn folder_name_sanitizes() {
        assert_eq!(
            folder_name("Top Gun: Maverick (2022)", "mp4").unwrap(),
            "Top Gun Maverick (2022)"
        );
    }

    #[test]
    fn folder_name_rejects_empty() {
        assert_eq!(folder_name("", "mp4"), Err(NamingError::Empty));
        assert_eq!(folder_name("?*. ", "mp4"), Err(NamingError::Empty));
    }

    #[test]
    fn folder_name_leaves_room_for_temp_suffix() {
        // 246 + ".mp4" + ".part" == 255 exactly.
        let at_limit = "a".repeat(NAME_MAX - 4 - TEMP_SUFFIX.len());
        assert!(folder_name(&at_limit, "mp4").is_ok());

        let over = "a".repeat(NAME_MAX - 4 - TEMP_SUFFIX.len() + 1);
        match folder_name(&over, "mp4") {
            Err(NamingError::TooLong { len, name }) => {
                assert_eq!(len, NAME_MAX + 1);
                assert_eq!(name, format!("{over}.mp4"));
            }
            other => panic!("expected TooLong, got {other:?}"),
        }
    }

    #[test]
    fn folder_name_rejects_names_that_only_fit_without_temp_suffix() {
        // "<name>.mp4" is 255 bytes, but "<name>.mp4.part" is not.
        let name = "a".repeat(NAME_MAX - 4);
        assert!(matches!(
            folder_name(&name, "mp4"),
            Err(NamingError::TooLong { .. })
        ));
    }

    #[test]
    fn folder_name_length_counts_bytes() {
        // "é" is two bytes in UTF-8.
        let name = "é".repeat(126);
        assert!(matches!(
            folder_name(&name, "mp4"),
            Err(NamingError::TooLong { .. })
        ));
    }
}
