use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use tidyname::case::CaseFormat;
use tidyname::rename::{rename_paths, RenameOptions};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct RenameArgs {
    /// Files or directories to rename (a single directory renames its contents)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Recurse into directories
    #[arg(short, long)]
    recursive: bool,

    /// Case format for new names: snake, kebab, dotted, camel, pascal
    #[arg(long, default_value = "kebab")]
    format: String,

    /// Preview changes without renaming
    #[arg(long)]
    dry_run: bool,

    /// Suppress status output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
pub struct RenameOutput {
    pub format: &'static str,
    pub dry_run: bool,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

pub fn run(args: RenameArgs, _global: &GlobalArgs) -> CmdResult<RenameOutput> {
    let format = CaseFormat::parse(&args.format)?;
    let options = RenameOptions {
        recursive: args.recursive,
        format,
        quiet: args.quiet,
        dry_run: args.dry_run,
    };
    let outcome = rename_paths(&args.paths, &options)?;
    Ok((
        RenameOutput {
            format: format.as_str(),
            dry_run: args.dry_run,
            from: outcome.from,
            to: outcome.to,
        },
        0,
    ))
}
