use clap::{Args, Subcommand};
use serde::Serialize;

use tidyname::case::{self, CaseFormat, CaseOptions};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CaseArgs {
    #[command(subcommand)]
    command: CaseCommand,
}

#[derive(Subcommand)]
enum CaseCommand {
    /// Convert strings to snake_case
    Snake(ConvertArgs),
    /// Convert strings to kebab-case
    Kebab(ConvertArgs),
    /// Convert strings to dotted.case
    Dotted(ConvertArgs),
    /// Convert strings to lowerCamelCase
    Camel(ConvertArgs),
    /// Convert strings to UpperCamelCase
    Pascal(ConvertArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Strings to convert
    #[arg(required = true)]
    strings: Vec<String>,

    /// Disable smart symbol and acronym handling
    #[arg(long)]
    no_smart: bool,

    /// Strip the guard prefix from names that start with a digit
    #[arg(long)]
    no_prefix: bool,

    /// Preserve mixed-case acronyms instead of forcing lowercase (camel/pascal)
    #[arg(long)]
    no_strict: bool,
}

#[derive(Debug, Serialize)]
pub struct CaseOutput {
    pub format: &'static str,
    pub input: Vec<String>,
    pub names: Vec<String>,
}

pub fn run(args: CaseArgs, _global: &GlobalArgs) -> CmdResult<CaseOutput> {
    let (format, convert) = match args.command {
        CaseCommand::Snake(a) => (CaseFormat::Snake, a),
        CaseCommand::Kebab(a) => (CaseFormat::Kebab, a),
        CaseCommand::Dotted(a) => (CaseFormat::Dotted, a),
        CaseCommand::Camel(a) => (CaseFormat::Camel, a),
        CaseCommand::Pascal(a) => (CaseFormat::Pascal, a),
    };
    let options = CaseOptions {
        smart: !convert.no_smart,
        prefix: !convert.no_prefix,
        strict: !convert.no_strict,
    };
    let names = case::convert(&convert.strings, format, &options)?;
    Ok((
        CaseOutput {
            format: format.as_str(),
            input: convert.strings,
            names,
        },
        0,
    ))
}
