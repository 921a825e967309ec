use clap::Args;
use serde::Serialize;

use tidyname::names::make_names;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct NamesArgs {
    /// Strings to convert into syntactically valid names
    #[arg(required = true)]
    strings: Vec<String>,

    /// Rewrite meaningful symbols (&, +, /, %, hyphens) into word tokens
    #[arg(long)]
    smart: bool,

    /// Allow duplicate names instead of appending numeric suffixes
    #[arg(long)]
    no_unique: bool,
}

#[derive(Debug, Serialize)]
pub struct NamesOutput {
    pub input: Vec<String>,
    pub names: Vec<String>,
}

pub fn run(args: NamesArgs, _global: &GlobalArgs) -> CmdResult<NamesOutput> {
    let names = make_names(&args.strings, !args.no_unique, args.smart)?;
    Ok((
        NamesOutput {
            input: args.strings,
            names,
        },
        0,
    ))
}
