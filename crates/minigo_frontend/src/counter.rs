use serde::ser::SerializeMap;

use crate::token::{Token, TokenKind};

/// Name of the bucket for tokens of a kind the table does not know.
pub const OTHER_BUCKET: &str = "LEXICAL_ERROR";

/// Frequency of each token kind, seeded with every known kind at zero.
///
/// Serializes as a map in the fixed order of [`TokenKind::ALL`], followed by
/// the catch-all bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    known: [usize; TokenKind::ALL.len()],
    other: usize,
}

impl TokenCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: TokenKind) {
        match TokenKind::ALL.iter().position(|&k| k == kind) {
            Some(index) => self.known[index] += 1,
            None => self.other += 1,
        }
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        TokenKind::ALL
            .iter()
            .position(|&k| k == kind)
            .map_or(0, |index| self.known[index])
    }

    /// Count of the catch-all bucket.
    pub fn other(&self) -> usize {
        self.other
    }

    pub fn total(&self) -> usize {
        self.known.iter().sum::<usize>() + self.other
    }

    /// Every bucket with its name, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        TokenKind::ALL
            .iter()
            .zip(self.known)
            .map(|(kind, n)| (kind.name(), n))
            .chain(std::iter::once((OTHER_BUCKET, self.other)))
    }
}

impl<'a, 'src: 'a> FromIterator<&'a Token<'src>> for TokenCounts {
    fn from_iter<I: IntoIterator<Item = &'a Token<'src>>>(tokens: I) -> Self {
        let mut counts = TokenCounts::new();
        for token in tokens {
            counts.record(token.kind);
        }
        counts
    }
}

impl serde::Serialize for TokenCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(TokenKind::ALL.len() + 1))?;
        for (name, n) in self.iter() {
            map.serialize_entry(name, &n)?;
        }
        map.end()
    }
}

pub fn count<'a, 'src: 'a>(tokens: impl IntoIterator<Item = &'a Token<'src>>) -> TokenCounts {
    tokens.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex;

    #[test]
    fn seeded_with_zeroes() {
        let counts = TokenCounts::new();

        assert_eq!(counts.total(), 0);
        assert_eq!(counts.iter().count(), 19);
        assert!(counts.iter().all(|(_, n)| n == 0));
        assert_eq!(counts.iter().last(), Some((OTHER_BUCKET, 0)));
    }

    #[test]
    fn counts_by_kind() {
        let (tokens, _) = lex("fmt.Println(1 + 2 + 3)");
        let tokens: Vec<_> = tokens.collect();
        let counts = count(&tokens);

        assert_eq!(counts.get(TokenKind::Fmt), 1);
        assert_eq!(counts.get(TokenKind::Period), 1);
        assert_eq!(counts.get(TokenKind::Println), 1);
        assert_eq!(counts.get(TokenKind::Number), 3);
        assert_eq!(counts.get(TokenKind::Plus), 2);
        assert_eq!(counts.get(TokenKind::Identifier), 0);
        assert_eq!(counts.other(), 0);
        assert_eq!(counts.total(), tokens.len());
    }

    #[test]
    fn illegal_characters_are_not_counted() {
        let (tokens, errors) = lex("@ # $");
        let counts = tokens.as_slice().iter().collect::<TokenCounts>();

        assert_eq!(errors.len(), 3);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.other(), 0);
    }

    #[test]
    fn table_order() {
        let names: Vec<_> = TokenCounts::new().iter().map(|(name, _)| name).collect();

        assert_eq!(
            names,
            [
                "PACKAGE",
                "IMPORT",
                "FUNC",
                "FMT",
                "PRINTLN",
                "ID",
                "NUMBER",
                "STRING",
                "PLUS",
                "MINUS",
                "TIMES",
                "DIVIDE",
                "LPAREN",
                "RPAREN",
                "LBRACE",
                "RBRACE",
                "SEMICOLON",
                "PERIOD",
                "LEXICAL_ERROR",
            ]
        );
    }
}
