use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::source::SourceFile;
use super::{Config, Diagnostic, DiagnosticKind};
use crate::span::Span;

const TAB: &str = "    ";

impl Diagnostic {
    pub fn write_to_stream(
        &self,
        source: &SourceFile,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            source,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor> {
    diagnostic: &'a Diagnostic,
    source: &'a SourceFile,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor> DiagnosticWriter<'_, 'a, W> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let snippets = self.snippet_datas();
        if snippets.is_empty() {
            writeln!(self.stream)?;
            return Ok(());
        }

        let num_lines = self.source.num_lines();
        let context_size = self.config.context_size;

        let groups = get_overlapping_groups(snippets, |s| {
            Span::new(
                s.line.saturating_sub(context_size),
                (s.line + 1 + context_size).min(num_lines),
            )
        });

        for (snippets, lines) in groups {
            self.draw_group(&snippets, lines)?;
        }

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(self.get_primary_color())?;

        if let Some(id) = &self.diagnostic.id {
            write!(self.stream, "[{id}] ")?;
        }

        write!(self.stream, "{}:", self.diagnostic.kind.as_str())?;

        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_group(&mut self, snippets: &[SnippetData], lines: Span) -> io::Result<()> {
        let source = self.source;
        let line_num_width = 1 + lines.end.max(1).ilog10() as usize;

        // all groups have at least one snippet
        let (line_num, col_num) = source
            .byte_to_line_col(snippets[0].bytes.start)
            .unwrap_or((snippets[0].line + 1, 1));

        self.stream.set_color(&self.config.subtle)?;
        writeln!(self.stream, "In {}:{line_num}:{col_num}", source.name())?;
        self.stream.reset()?;

        for line in lines {
            let Some(line_str) = source.line_str(line) else {
                break;
            };

            self.draw_gutter(Some(line + 1), line_num_width)?;
            writeln!(self.stream, "{}", line_str.replace('\t', TAB))?;

            let line_start = source.line_to_byte(line).unwrap_or(0);
            for snippet in snippets.iter().filter(|s| s.line == line) {
                self.draw_gutter(None, line_num_width)?;

                let before_snippet = source
                    .source_str()
                    .get(line_start..snippet.bytes.start)
                    .unwrap_or_default();
                let offset = str_width(before_snippet);

                // snippets spanning several lines are underlined up to the end of their first line
                let line_end = line_start + line_str.len();
                let underlined = source
                    .source_str()
                    .get(snippet.bytes.start..snippet.bytes.end.min(line_end))
                    .unwrap_or_default();

                self.stream.set_color(self.get_primary_color())?;

                write!(self.stream, "{:<offset$}", "")?;

                for _ in 0..str_width(underlined).max(1) {
                    write!(self.stream, "{}", self.config.underline)?;
                }

                writeln!(
                    self.stream,
                    "{}{}",
                    self.config.underline_after, snippet.label
                )?;

                self.stream.reset()?;
            }
        }

        writeln!(self.stream)?;

        Ok(())
    }

    fn draw_gutter(&mut self, line_num: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line_num {
            Some(line_num) => write!(self.stream, "{line_num:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()?;

        Ok(())
    }

    fn snippet_datas(&self) -> Vec<SnippetData<'a>> {
        self.diagnostic
            .snippets
            .iter()
            .map(|snippet| {
                // clamp so a span at or past the end still lands on the last line
                let start = snippet.span.start.min(self.source.source_str().len());
                let line = self.source.byte_to_line_index(start).unwrap_or(0);

                SnippetData {
                    label: &snippet.label,

                    bytes: Span::new(start, snippet.span.end.max(start)),
                    line,
                }
            })
            .collect()
    }

    fn get_primary_color(&self) -> &'a ColorSpec {
        match self.diagnostic.kind {
            DiagnosticKind::Warning => &self.config.warning_color,
            DiagnosticKind::Error => &self.config.error_color,
        }
    }
}

#[derive(Clone)]
struct SnippetData<'a> {
    label: &'a str,

    bytes: Span,
    line: usize,
}

fn get_overlapping_groups<T, F>(mut items: Vec<T>, get_range: F) -> Vec<(Vec<T>, Span)>
where
    F: Fn(&T) -> Span,
{
    items.sort_by_key(|item| get_range(item).start);

    let mut groups = vec![];

    let mut group = vec![];
    let mut group_start = 0;
    let mut group_end = 0;

    for item in items {
        let range = get_range(&item);

        if range.start > group_end && !group.is_empty() {
            groups.push((
                std::mem::take(&mut group),
                Span::new(group_start, group_end),
            ));
        }

        if group.is_empty() {
            group_start = range.start;
        }

        group_end = group_end.max(range.end);
        group.push(item);
    }

    if !group.is_empty() {
        groups.push((group, Span::new(group_start, group_end)));
    }

    groups
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}
