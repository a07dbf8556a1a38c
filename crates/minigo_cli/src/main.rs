mod cli;
mod report;

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command, Format};
use minigo_diagnostic::source::SourceFile;
use minigo_diagnostic::termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};
use minigo_diagnostic::{DiagnosticEmitter, IntoDiagnostic, PrettyDiagnosticEmitter};
use minigo_frontend::Analysis;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("error encoding json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {name}: {source}")]
    Read { name: String, source: io::Error },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "minigo=debug,minigo_frontend=debug"
    } else {
        "minigo=warn,minigo_frontend=warn"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // stdout carries the report, logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let color: ColorChoice = cli.color.into();
    let mut emitter = PrettyDiagnosticEmitter::new(color);

    match cli.command {
        Command::Analyze {
            input,
            format,
            output,
        } => {
            let file = input.read().map_err(|source| CliError::Read {
                name: input.input.clone(),
                source,
            })?;

            tracing::info!(name = file.name(), bytes = file.source_str().len(), "analyzing");

            let analysis = minigo_frontend::analyze(file.source_str());
            emit_all(&mut emitter, &file, analysis.lexer_errors.iter().cloned());
            emit_all(&mut emitter, &file, analysis.syntax_error().cloned());

            match output {
                Some(path) => {
                    let mut stream = NoColor::new(File::create(path)?);
                    write_analysis(&analysis, format, &mut stream)?;
                }
                None => {
                    let mut stream = StandardStream::stdout(color);
                    write_analysis(&analysis, format, &mut stream)?;
                }
            }

            Ok(if analysis.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Command::Tokens { input } => {
            let file = input.read().map_err(|source| CliError::Read {
                name: input.input.clone(),
                source,
            })?;

            let (tokens, lexer_errors) = minigo_frontend::lex(file.source_str());
            emit_all(&mut emitter, &file, lexer_errors);

            let mut stream = StandardStream::stdout(color);
            report::write_tokens(tokens.as_slice(), &mut stream)?;

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn write_analysis(
    analysis: &Analysis,
    format: Format,
    stream: &mut impl WriteColor,
) -> CliResult<()> {
    match format {
        Format::Text => report::write_analysis(analysis, stream)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *stream, analysis)?;
            writeln!(stream)?;
        }
    }

    Ok(())
}

fn emit_all<I>(emitter: &mut impl DiagnosticEmitter, file: &SourceFile, diagnostics: I)
where
    I: IntoIterator,
    I::Item: IntoDiagnostic,
{
    for diagnostic in diagnostics {
        emitter.emit_diagnostic(diagnostic.into_diagnostic(), file);
    }
}
