//! Argument Input
//!
//! A forward-only cursor over an already-split list of command-line tokens.
//! The dispatcher consumes the keyword and hands the same cursor to the
//! selected command, which consumes the rest.

use std::iter::FusedIterator;

/// Forward-only cursor over a fixed token list.
///
/// The token list never changes after construction; only the read position
/// moves, and it never moves backwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgInput {
    tokens: Vec<String>,
    index: usize,
}

impl ArgInput {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Cursor over the process arguments, without the program name.
    pub fn from_env() -> Self {
        std::env::args().skip(1).collect()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    /// Total number of tokens, consumed or not.
    pub fn length(&self) -> usize {
        self.tokens.len()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.index)
    }

    /// Token at the read position, without advancing.
    pub fn current(&self) -> Option<&str> {
        self.tokens.get(self.index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Every token, including the ones already consumed.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens not yet consumed.
    pub fn rest(&self) -> &[String] {
        &self.tokens[self.index.min(self.tokens.len())..]
    }
}

impl Iterator for ArgInput {
    type Item = String;

    /// Returns the current token and advances past it. Once the list is
    /// exhausted this keeps returning `None`; the position stays at `length`.
    fn next(&mut self) -> Option<String> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl FusedIterator for ArgInput {}

impl From<Vec<String>> for ArgInput {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

impl From<&[&str]> for ArgInput {
    fn from(tokens: &[&str]) -> Self {
        tokens.iter().map(|t| t.to_string()).collect()
    }
}

impl<const N: usize> From<[&str; N]> for ArgInput {
    fn from(tokens: [&str; N]) -> Self {
        tokens.iter().map(|t| t.to_string()).collect()
    }
}

impl FromIterator<String> for ArgInput {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
