use clap::Args;
use serde::Serialize;

use tidyname::pad::autopad_zeros;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct PadArgs {
    /// Values to pad with leading zeros
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PadOutput {
    pub input: Vec<String>,
    pub padded: Vec<String>,
}

pub fn run(args: PadArgs, _global: &GlobalArgs) -> CmdResult<PadOutput> {
    let padded = autopad_zeros(&args.values)?;
    Ok((
        PadOutput {
            input: args.values,
            padded,
        },
        0,
    ))
}
