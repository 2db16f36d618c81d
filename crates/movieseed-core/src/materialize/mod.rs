//! Materializing the catalog on disk.
//!
//! Every step is an existence check followed by at most one create, so a run can
//! be interrupted at any point and simply started again. Preconditions (source
//! present, every title yields a usable name) are checked before anything is
//! created.

mod error;
mod report;
mod verify;

pub use error::MaterializeError;
pub use report::{EntryReport, EntryStatus, SeedReport, VerifyEntry, VerifyReport, VerifyStatus};

use crate::config::SeedLayout;
use crate::naming::{folder_name, video_file_name};
use crate::storage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One catalog entry with its on-disk locations worked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// 1-based position in the title list.
    pub index: usize,
    pub title: String,
    pub name: String,
    pub folder: PathBuf,
    pub video_path: PathBuf,
}

/// Seeds (or checks) a movie tree from one source video.
#[derive(Debug, Clone)]
pub struct Materializer {
    layout: SeedLayout,
}

impl Materializer {
    pub fn new(layout: SeedLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &SeedLayout {
        &self.layout
    }

    /// Works out folder and file paths for every title, in order. Touches nothing.
    pub fn plan(&self, titles: &[&str]) -> Result<Vec<PlannedEntry>, MaterializeError> {
        let ext = &self.layout.video_extension;
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let name =
                    folder_name(title, ext).map_err(|source| MaterializeError::UnusableName {
                        index: i + 1,
                        title: title.to_string(),
                        source,
                    })?;
                let folder = self.layout.movies_dir.join(&name);
                let video_path = folder.join(video_file_name(&name, ext));
                Ok(PlannedEntry {
                    index: i + 1,
                    title: title.to_string(),
                    name,
                    folder,
                    video_path,
                })
            })
            .collect()
    }

    /// Ensures one folder and one video copy per title.
    ///
    /// `on_entry` sees each outcome as soon as it is known. Existing videos are
    /// never rewritten; duplicates in `titles` therefore report `Exists` after
    /// their first occurrence.
    pub fn seed<F>(&self, titles: &[&str], mut on_entry: F) -> Result<SeedReport, MaterializeError>
    where
        F: FnMut(&EntryReport),
    {
        self.check_source()?;
        let plan = self.plan(titles)?;

        let root = &self.layout.movies_dir;
        fs::create_dir_all(root).map_err(|e| MaterializeError::io("create dir", root, e))?;
        tracing::info!(
            source = %self.layout.source.display(),
            root = %root.display(),
            entries = plan.len(),
            "seeding movie folders"
        );

        let mut entries = Vec::with_capacity(plan.len());
        for entry in plan {
            let status = self.materialize_entry(&entry)?;
            let report = EntryReport {
                index: entry.index,
                title: entry.title,
                name: entry.name,
                video_path: entry.video_path,
                status,
            };
            on_entry(&report);
            entries.push(report);
        }

        let report = SeedReport {
            root: root.clone(),
            entries,
        };
        tracing::info!(
            total = report.total(),
            created = report.created(),
            existing = report.existing(),
            "seeding finished"
        );
        Ok(report)
    }

    fn materialize_entry(&self, entry: &PlannedEntry) -> Result<EntryStatus, MaterializeError> {
        if ensure_dir(&entry.folder)? {
            tracing::debug!(folder = %entry.folder.display(), "created folder");
        }

        let video = &entry.video_path;
        let present = video
            .try_exists()
            .map_err(|e| MaterializeError::io("stat", video, e))?;
        if present {
            tracing::debug!(index = entry.index, path = %video.display(), "video already present");
            return Ok(EntryStatus::Exists);
        }

        let bytes = storage::copy_with_metadata(&self.layout.source, video)
            .map_err(|e| MaterializeError::io("copy to", video, e))?;
        tracing::debug!(index = entry.index, path = %video.display(), bytes, "copied video");
        Ok(EntryStatus::Created)
    }

    /// Fails with [`MaterializeError::SourceMissing`] unless the source is a regular file.
    pub fn check_source(&self) -> Result<(), MaterializeError> {
        let source = &self.layout.source;
        let is_file = match fs::metadata(source) {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(MaterializeError::io("stat", source, e)),
        };
        if !is_file {
            tracing::debug!(path = %source.display(), "source video missing");
            return Err(MaterializeError::SourceMissing {
                path: source.clone(),
            });
        }
        Ok(())
    }
}

/// Creates `dir` if absent. Returns whether it was created.
fn ensure_dir(dir: &Path) -> Result<bool, MaterializeError> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(false),
        Err(e) => Err(MaterializeError::io("create dir", dir, e)),
    }
}
