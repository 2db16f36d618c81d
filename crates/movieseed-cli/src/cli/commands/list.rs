//! `movieseed list` – show each title's folder name without touching the disk.

use anyhow::Result;
use movieseed_core::catalog::{self, MOVIES};
use movieseed_core::materialize::Materializer;
use std::collections::HashMap;

pub fn run_list(materializer: &Materializer) -> Result<()> {
    let plan = materializer.plan(MOVIES)?;
    let collisions: HashMap<usize, usize> = catalog::collisions(MOVIES)
        .into_iter()
        .map(|c| (c.index, c.first_index))
        .collect();

    for entry in &plan {
        match collisions.get(&entry.index) {
            Some(first) => println!("{:3}. {}  (same folder as #{first})", entry.index, entry.name),
            None => println!("{:3}. {}", entry.index, entry.name),
        }
    }
    println!();
    println!(
        "{} titles, {} folders under {}",
        plan.len(),
        plan.len() - collisions.len(),
        materializer.layout().movies_dir.display()
    );
    Ok(())
}
