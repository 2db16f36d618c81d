//! Read-only check of a seeded tree against the source video.

use super::{Materializer, MaterializeError, VerifyEntry, VerifyReport, VerifyStatus};
use crate::checksum;
use anyhow::Result;

impl Materializer {
    /// Compares every planned video with the source by SHA-256. Creates nothing.
    pub fn verify<F>(&self, titles: &[&str], mut on_entry: F) -> Result<VerifyReport>
    where
        F: FnMut(&VerifyEntry),
    {
        self.check_source()?;
        let plan = self.plan(titles)?;
        let source_sha256 = checksum::sha256_path(&self.layout.source)?;

        let mut entries = Vec::with_capacity(plan.len());
        for entry in plan {
            let present = entry
                .video_path
                .try_exists()
                .map_err(|e| MaterializeError::io("stat", &entry.video_path, e))?;
            let status = if !present {
                VerifyStatus::Missing
            } else if checksum::sha256_path(&entry.video_path)? == source_sha256 {
                VerifyStatus::Ok
            } else {
                VerifyStatus::Mismatch
            };
            if status != VerifyStatus::Ok {
                tracing::warn!(index = entry.index, path = %entry.video_path.display(), %status, "verify problem");
            }
            let checked = VerifyEntry {
                index: entry.index,
                name: entry.name,
                video_path: entry.video_path,
                status,
            };
            on_entry(&checked);
            entries.push(checked);
        }

        Ok(VerifyReport {
            root: self.layout.movies_dir.clone(),
            source_sha256,
            entries,
        })
    }
}
