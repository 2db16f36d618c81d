//! `movieseed verify` – compare each seeded video with the source.

use anyhow::{bail, Result};
use movieseed_core::catalog::MOVIES;
use movieseed_core::materialize::{Materializer, VerifyStatus};

pub fn run_verify(materializer: &Materializer) -> Result<()> {
    let report = materializer.verify(MOVIES, |entry| {
        if entry.status != VerifyStatus::Ok {
            println!("{:3}. {:<8} {}", entry.index, entry.status, entry.name);
        }
    })?;

    let problems = report.problems().count();
    if problems > 0 {
        bail!(
            "{problems} of {} videos under {} are missing or differ from the source",
            report.entries.len(),
            report.root.display()
        );
    }
    println!(
        "All {} videos match the source ({})",
        report.entries.len(),
        report.source_sha256
    );
    Ok(())
}
