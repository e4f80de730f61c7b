use clap::{Parser, Subcommand};

use dango_cli::commands::{rules_ops, tokenize_ops};
use dango_cli::trace_init;

#[derive(Parser)]
#[command(name = "dango", about = "Group Japanese morphemes into words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate analyzed sentences into words, one output line per sentence
    Tokenize {
        /// Analysis TSV file (default: stdin)
        file: Option<String>,
        /// SudachiDict lexicon CSV for dictionary-form readings
        #[arg(long)]
        lexicon: Option<String>,
        /// Custom aggregation rules TOML
        #[arg(long)]
        rules: Option<String>,
        /// Print each sentence as a JSON array of words
        #[arg(long)]
        json: bool,
        /// Keep whitespace words in the output
        #[arg(long)]
        keep_whitespace: bool,
    },
    /// Export default aggregation rules as TOML
    RulesExport,
    /// Validate a custom aggregation rules TOML file
    RulesValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    trace_init::init_tracing();

    match cli.command {
        Command::Tokenize {
            file,
            lexicon,
            rules,
            json,
            keep_whitespace,
        } => {
            let opts = tokenize_ops::TokenizeOptions {
                lexicon,
                rules,
                json,
                keep_whitespace,
            };
            tokenize_ops::tokenize(file.as_deref(), &opts);
        }
        Command::RulesExport => rules_ops::rules_export(),
        Command::RulesValidate { file } => rules_ops::rules_validate(&file),
    }
}
