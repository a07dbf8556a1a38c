//! Plain-text rendering of an analysis.

use std::io;

use minigo_diagnostic::termcolor::{ColorSpec, WriteColor};
use minigo_frontend::ast::Program;
use minigo_frontend::token::Token;
use minigo_frontend::{Analysis, TokenCounts};

const TYPE_WIDTH: usize = 9;
const BUCKET_WIDTH: usize = 13;

pub fn write_analysis(analysis: &Analysis, stream: &mut impl WriteColor) -> io::Result<()> {
    write_tokens(&analysis.tokens, stream)?;
    writeln!(stream)?;

    write_counts(&analysis.counts, stream)?;
    writeln!(stream)?;

    match &analysis.recognition {
        Ok(program) => {
            write_heading(stream, "Syntax: ok")?;
            write_program(program, stream)
        }
        Err(err) => {
            write_heading(stream, "Syntax: error")?;
            writeln!(stream, "{err}")
        }
    }
}

pub fn write_tokens(tokens: &[Token], stream: &mut impl WriteColor) -> io::Result<()> {
    write_heading(
        stream,
        &format!("{:>4}  {:<TYPE_WIDTH$}  {}", "LINE", "TYPE", "VALUE"),
    )?;

    for token in tokens {
        writeln!(
            stream,
            "{:>4}  {:<TYPE_WIDTH$}  {}",
            token.line,
            token.kind.name(),
            token.value
        )?;
    }

    Ok(())
}

pub fn write_counts(counts: &TokenCounts, stream: &mut impl WriteColor) -> io::Result<()> {
    write_heading(stream, &format!("{:<BUCKET_WIDTH$}  COUNT", "TYPE"))?;

    for (name, n) in counts.iter() {
        writeln!(stream, "{name:<BUCKET_WIDTH$}  {n}")?;
    }

    writeln!(stream, "{:<BUCKET_WIDTH$}  {}", "TOTAL", counts.total())
}

fn write_program(program: &Program, stream: &mut impl WriteColor) -> io::Result<()> {
    writeln!(stream, "package {}", program.package_name)?;
    writeln!(stream, "import {}", program.import.path)?;
    writeln!(stream, "func {}()", program.function.name)?;
    writeln!(stream, "    fmt.Println({})", program.function.body.argument)
}

fn write_heading(stream: &mut impl WriteColor, heading: &str) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_bold(true))?;
    write!(stream, "{heading}")?;
    stream.reset()?;
    writeln!(stream)
}
