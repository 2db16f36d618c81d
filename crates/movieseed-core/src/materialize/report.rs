//! Per-entry outcomes and run summaries.

use std::fmt;
use std::path::PathBuf;

/// What happened to one catalog entry during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The video was copied in this run.
    Created,
    /// The video was already present; nothing was copied.
    Exists,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EntryStatus::Created => "Created",
            EntryStatus::Exists => "Exists",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// 1-based position in the title list.
    pub index: usize,
    pub title: String,
    pub name: String,
    pub video_path: PathBuf,
    pub status: EntryStatus,
}

/// Outcome of a full seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub root: PathBuf,
    pub entries: Vec<EntryReport>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn created(&self) -> usize {
        self.count(EntryStatus::Created)
    }

    pub fn existing(&self) -> usize {
        self.count(EntryStatus::Exists)
    }

    fn count(&self, status: EntryStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

/// Result of checking one entry against the source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStatus {
    Ok,
    Missing,
    /// Present but its SHA-256 differs from the source's.
    Mismatch,
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            VerifyStatus::Ok => "OK",
            VerifyStatus::Missing => "Missing",
            VerifyStatus::Mismatch => "Mismatch",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEntry {
    pub index: usize,
    pub name: String,
    pub video_path: PathBuf,
    pub status: VerifyStatus,
}

#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub root: PathBuf,
    pub source_sha256: String,
    pub entries: Vec<VerifyEntry>,
}

impl VerifyReport {
    /// Entries that are missing or differ from the source.
    pub fn problems(&self) -> impl Iterator<Item = &VerifyEntry> {
        self.entries.iter().filter(|e| e.status != VerifyStatus::Ok)
    }

    pub fn is_clean(&self) -> bool {
        self.problems().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize, status: EntryStatus) -> EntryReport {
        EntryReport {
            index,
            title: format!("Movie {index}"),
            name: format!("Movie {index}"),
            video_path: PathBuf::from(format!("movies/Movie {index}/Movie {index}.mp4")),
            status,
        }
    }

    #[test]
    fn seed_report_counts() {
        let report = SeedReport {
            root: PathBuf::from("movies"),
            entries: vec![
                entry(1, EntryStatus::Created),
                entry(2, EntryStatus::Exists),
                entry(3, EntryStatus::Created),
            ],
        };
        assert_eq!(report.total(), 3);
        assert_eq!(report.created(), 2);
        assert_eq!(report.existing(), 1);
    }

    #[test]
    fn status_labels() {
        assert_eq!(EntryStatus::Created.to_string(), "Created");
        assert_eq!(EntryStatus::Exists.to_string(), "Exists");
        assert_eq!(VerifyStatus::Mismatch.to_string(), "Mismatch");
        assert_eq!(format!("{:<8}|", VerifyStatus::Ok), "OK      |");
    }

    #[test]
    fn verify_report_problems() {
        let mk = |index, status| VerifyEntry {
            index,
            name: "x".into(),
            video_path: PathBuf::from("x.mp4"),
            status,
        };
        let report = VerifyReport {
            root: PathBuf::from("movies"),
            source_sha256: String::new(),
            entries: vec![mk(1, VerifyStatus::Ok), mk(2, VerifyStatus::Missing)],
        };
        assert!(!report.is_clean());
        assert_eq!(report.problems().map(|e| e.index).collect::<Vec<_>>(), vec![2]);
    }
}
