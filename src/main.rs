use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{case, names, pad, rename, words, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "tidyname")]
#[command(version = VERSION)]
#[command(about = "Make syntactically valid, consistently cased names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Make syntactically valid names out of strings
    Names(names::NamesArgs),
    /// Convert strings to a case format
    Case(case::CaseArgs),
    /// Convert identifiers to human-readable words and labels
    Words(words::WordsArgs),
    /// Pad numbers with leading zeros for consistent sorting
    Pad(pad::PadArgs),
    /// Rename files and directories using a case format
    Rename(rename::RenameArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = match cli.command {
        Commands::Names(args) => output::map_cmd_result_to_json(names::run(args, &global)),
        Commands::Case(args) => output::map_cmd_result_to_json(case::run(args, &global)),
        Commands::Words(args) => output::map_cmd_result_to_json(words::run(args, &global)),
        Commands::Pad(args) => output::map_cmd_result_to_json(pad::run(args, &global)),
        Commands::Rename(args) => output::map_cmd_result_to_json(rename::run(args, &global)),
    };

    output::print_json_result(json_result);
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
