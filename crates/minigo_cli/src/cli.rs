use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use minigo_diagnostic::source::SourceFile;
use minigo_diagnostic::termcolor::ColorChoice;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output. `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to colour the report and diagnostics.
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize, count and recognize a program.
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// How to print the result.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// The output file. If not specified, prints to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the tokens of a program.
    Tokens {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// The input file, or `-` to read stdin.
    pub input: String,

    /// Whether the given input should be used directly as the source instead
    /// of as the source file path.
    #[clap(long, short, action)]
    pub source: bool,
}

impl InputArgs {
    pub fn read(&self) -> io::Result<SourceFile> {
        if self.source {
            return Ok(SourceFile::new("<source>", self.input.as_str()));
        }

        if self.input == "-" {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            return Ok(SourceFile::new("<stdin>", source));
        }

        let source = std::fs::read_to_string(&self.input)?;
        Ok(SourceFile::new(self.input.as_str(), source))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Token table, count table and recognition result.
    Text,
    /// `{ tokens, counts, syntax_error }`.
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}
