//! `movieseed seed` – create missing folders and videos, one status line per entry.

use anyhow::Result;
use movieseed_core::catalog::MOVIES;
use movieseed_core::materialize::{EntryReport, EntryStatus, Materializer, SeedReport};
use std::io::{self, Write};

pub fn run_seed(materializer: &Materializer) -> Result<()> {
    write_seed(materializer, MOVIES, &mut io::stdout().lock())
}

/// Seeds `titles`, writing the header, one line per entry and the summary to `out`.
/// Nothing is written unless the source video is present.
pub(crate) fn write_seed<W: Write>(
    materializer: &Materializer,
    titles: &[&str],
    out: &mut W,
) -> Result<()> {
    materializer.check_source()?;
    writeln!(out, "Creating folders for {} movies...", titles.len())?;

    let mut write_err: Option<io::Error> = None;
    let report = materializer.seed(titles, |entry| {
        if write_err.is_none() {
            write_err = writeln!(out, "{}", entry_line(entry)).err();
        }
    })?;
    if let Some(e) = write_err {
        return Err(e.into());
    }

    writeln!(out)?;
    writeln!(out, "{}", summary_line(&report))?;
    Ok(())
}

/// ` 42. Created: Name` / ` 42. Exists:  Name`; labels padded to the same width.
pub(crate) fn entry_line(entry: &EntryReport) -> String {
    let label = match entry.status {
        EntryStatus::Created => "Created:",
        EntryStatus::Exists => "Exists: ",
    };
    format!("{:3}. {} {}", entry.index, label, entry.name)
}

pub(crate) fn summary_line(report: &SeedReport) -> String {
    format!(
        "Completed! Processed {} movie folders in {} ({} created, {} already present)",
        report.total(),
        report.root.display(),
        report.created(),
        report.existing()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use movieseed_core::config::SeedLayout;
    use movieseed_core::materialize::MaterializeError;
    use std::path::{Path, PathBuf};

    fn materializer(dir: &Path) -> Materializer {
        Materializer::new(SeedLayout {
            source: dir.join("show-stream-demo.mp4"),
            movies_dir: dir.join("movies"),
            video_extension: "mp4".to_string(),
        })
    }

    fn entry(index: usize, status: EntryStatus) -> EntryReport {
        EntryReport {
            index,
            title: "Se7en (1995)".into(),
            name: "Se7en (1995)".into(),
            video_path: PathBuf::from("movies/Se7en (1995)/Se7en (1995).mp4"),
            status,
        }
    }

    #[test]
    fn entry_lines_align() {
        assert_eq!(entry_line(&entry(7, EntryStatus::Created)), "  7. Created: Se7en (1995)");
        assert_eq!(entry_line(&entry(42, EntryStatus::Exists)), " 42. Exists:  Se7en (1995)");
        assert_eq!(entry_line(&entry(247, EntryStatus::Exists)), "247. Exists:  Se7en (1995)");
    }

    #[test]
    fn summary_mentions_total_and_root() {
        let report = SeedReport {
            root: PathBuf::from("/demo/movies"),
            entries: vec![entry(1, EntryStatus::Created), entry(2, EntryStatus::Exists)],
        };
        assert_eq!(
            summary_line(&report),
            "Completed! Processed 2 movie folders in /demo/movies (1 created, 1 already present)"
        );
    }

    #[test]
    fn missing_source_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let err = write_seed(&materializer(dir.path()), &["Up (2009)"], &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MaterializeError>(),
            Some(MaterializeError::SourceMissing { .. })
        ));
        assert!(out.is_empty(), "unexpected output: {:?}", String::from_utf8_lossy(&out));
        assert!(!dir.path().join("movies").exists());
    }

    #[test]
    fn seed_output_has_header_entries_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("show-stream-demo.mp4"), b"demo").unwrap();
        let mut out = Vec::new();

        write_seed(
            &materializer(dir.path()),
            &["Heat (1995)", "Heat (1995)"],
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Creating folders for 2 movies...");
        assert_eq!(lines[1], "  1. Created: Heat (1995)");
        assert_eq!(lines[2], "  2. Exists:  Heat (1995)");
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("Completed! Processed 2 movie folders in "));
        assert!(lines[4].ends_with("(1 created, 1 already present)"));
    }
}
