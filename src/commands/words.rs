use clap::{Args, Subcommand};
use serde::Serialize;

use tidyname::words::{make_label, make_title, make_words};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct WordsArgs {
    #[command(subcommand)]
    command: WordsCommand,
}

#[derive(Subcommand)]
enum WordsCommand {
    /// Convert identifiers to human-readable words
    Words {
        #[arg(required = true)]
        strings: Vec<String>,
    },
    /// Convert identifiers to title-cased strings
    Title {
        #[arg(required = true)]
        strings: Vec<String>,
    },
    /// Convert identifiers to capitalized labels
    Label {
        #[arg(required = true)]
        strings: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct WordsOutput {
    pub input: Vec<String>,
    pub words: Vec<String>,
}

pub fn run(args: WordsArgs, _global: &GlobalArgs) -> CmdResult<WordsOutput> {
    let (input, words) = match args.command {
        WordsCommand::Words { strings } => {
            let words = make_words(&strings)?;
            (strings, words)
        }
        WordsCommand::Title { strings } => {
            let words = make_title(&strings)?;
            (strings, words)
        }
        WordsCommand::Label { strings } => {
            let words = make_label(&strings)?;
            (strings, words)
        }
    };
    Ok((WordsOutput { input, words }, 0))
}
