use termcolor::{ColorChoice, StandardStream};

use crate::source::SourceFile;
use crate::{Config, Diagnostic};

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, source: &SourceFile);
}

/// Writes rendered diagnostics to stderr.
pub struct PrettyDiagnosticEmitter {
    pub stream: StandardStream,
    pub config: Config,
}

impl PrettyDiagnosticEmitter {
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stderr(color_choice),
            config: Config::default(),
        }
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, source: &SourceFile) {
        let _ = diagnostic.write_to_stream(source, &self.config, &mut self.stream);
    }
}
