/// A named source text with a precomputed line index.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    source: String,

    #[cfg_attr(feature = "serialize", serde(skip))]
    line_breaks: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_breaks = source
            .char_indices()
            .filter_map(|(i, ch)| (ch == '\n').then_some(i))
            .collect();

        Self {
            name: name.into(),
            source,
            line_breaks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_str(&self) -> &str {
        &self.source
    }

    /// One-based line and column (in characters) of a byte offset.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;

        let line_start = self.line_to_byte(line)?;
        let col = self.source.get(line_start..byte)?.chars().count();

        Some((line + 1, col + 1))
    }

    /// Zero-based line index of a byte offset.
    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.source.len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        if line == 0 {
            Some(0)
        } else {
            self.line_breaks.get(line - 1).map(|&byte| byte + 1)
        }
    }

    pub fn line_str(&self, index: usize) -> Option<&str> {
        let start = self.line_to_byte(index)?;
        let end = self.line_to_byte(index + 1).unwrap_or(self.source.len());

        let s = &self.source[start..end];
        let s = s.strip_suffix('\n').unwrap_or(s);
        let s = s.strip_suffix('\r').unwrap_or(s);

        Some(s)
    }

    pub fn num_lines(&self) -> usize {
        1 + self.line_breaks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::SourceFile;

    fn source(s: &str) -> SourceFile {
        SourceFile::new("sample.go", s)
    }

    #[test]
    fn line_index() {
        let file = source("");
        assert_eq!(file.byte_to_line_index(0), Some(0));
        assert_eq!(file.byte_to_line_index(1), None);

        let file = source("x\n");
        assert_eq!(file.byte_to_line_index(0), Some(0));
        assert_eq!(file.byte_to_line_index(1), Some(0));
        assert_eq!(file.byte_to_line_index(2), Some(1));
        assert_eq!(file.byte_to_line_index(3), None);

        let file = source("\n\nx");
        assert_eq!(file.byte_to_line_index(0), Some(0));
        assert_eq!(file.byte_to_line_index(1), Some(1));
        assert_eq!(file.byte_to_line_index(2), Some(2));
    }

    #[test]
    fn line_col() {
        let file = source("package main;\nimport \"fmt\"");
        assert_eq!(file.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(file.byte_to_line_col(12), Some((1, 13)));
        assert_eq!(file.byte_to_line_col(14), Some((2, 1)));
        assert_eq!(file.byte_to_line_col(21), Some((2, 8)));
    }

    #[test]
    fn line_col_counts_chars() {
        let file = source("ñandú @");
        assert_eq!(file.byte_to_line_col(8), Some((1, 7)));
    }

    #[test]
    fn lines() {
        let file = source("a\r\nb\n");
        assert_eq!(file.num_lines(), 3);
        assert_eq!(file.line_str(0), Some("a"));
        assert_eq!(file.line_str(1), Some("b"));
        assert_eq!(file.line_str(2), Some(""));
        assert_eq!(file.line_str(3), None);

        assert_eq!(file.line_to_byte(1), Some(3));
        assert_eq!(file.line_to_byte(3), None);
    }
}
