//! @ai:module:intent CLI entry point for lexeme classification and generation
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on classifier, generator, output

use clap::{Parser, Subcommand, ValueEnum};
use lexbench_lexeme::{
    classifier, output, CategorySelection, LexemeCategory, LexemeGenerator, OutputFormat,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lexeme")]
#[command(author, version, about = "Classify source text into lexemes and generate synthetic ones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the lexemes of a source file
    Classify {
        /// Path to the source file
        path: PathBuf,

        /// Restrict to one category (keyword, identifier, operator, delimiter, literal, comment)
        #[arg(long, short)]
        category: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Generate random keywords, operators and delimiters
    Generate {
        /// Number of lexemes to generate
        #[arg(long, short = 'n', default_value = "10")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            path,
            category,
            format,
        } => {
            let selection = match category.as_deref().map(str::parse::<LexemeCategory>) {
                None => CategorySelection::All,
                Some(Ok(category)) => CategorySelection::Only(category),
                Some(Err(e)) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };

            match classifier::classify_file(&path, selection) {
                Ok(tokens) => {
                    println!("{}", output::format_token_set(&tokens, format.into()));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Generate {
            count,
            seed,
            format,
        } => {
            let mut generator = match seed {
                Some(seed) => LexemeGenerator::with_seed(seed),
                None => LexemeGenerator::new(),
            };

            let lexemes = generator.generate_many(count);
            println!("{}", output::format_lexemes(&lexemes, format.into()));
            ExitCode::SUCCESS
        }
    }
}
