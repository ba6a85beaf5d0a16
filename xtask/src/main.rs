//! Development tasks for the cutline workspace.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for cutline")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for cutline and its subcommands
    Man {
        /// Output directory
        #[arg(short, long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create {}", out.display()))?;

    let cmd = cutline::cli::Cli::command();
    let name = cmd.get_name().to_string();

    let mut pages = vec![(name.clone(), cmd.clone())];
    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        pages.push((format!("{}-{}", name, sub.get_name()), sub.clone()));
    }

    for (page, command) in pages {
        let mut buffer = Vec::new();
        clap_mangen::Man::new(command)
            .title(page.clone())
            .render(&mut buffer)?;
        let path = out.join(format!("{}.1", page));
        fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Generated {}", path.display());
    }

    Ok(())
}
