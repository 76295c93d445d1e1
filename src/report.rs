//! Plain-text rendering of a token list.

use crate::token::Token;
use std::fmt;

/// Table of tokens with `#`, `Value`, `Type` and `Line` columns.
pub struct TokenTable<'a> {
    title: &'a str,
    tokens: &'a [Token],
}

impl<'a> TokenTable<'a> {
    pub fn new(title: &'a str, tokens: &'a [Token]) -> Self {
        Self { title, tokens }
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = ["#".len(), "Value".len(), "Type".len(), "Line".len()];
        for (idx, token) in self.tokens.iter().enumerate() {
            widths[0] = widths[0].max((idx + 1).to_string().len());
            widths[1] = widths[1].max(token.value.chars().count());
            widths[2] = widths[2].max(token.category.tag().len());
            widths[3] = widths[3].max(token.line.to_string().len());
        }
        widths
    }
}

impl fmt::Display for TokenTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w0, w1, w2, w3] = self.widths();
        writeln!(f, "{}", self.title)?;
        writeln!(
            f,
            "| {:>w0$} | {:<w1$} | {:<w2$} | {:>w3$} |",
            "#", "Value", "Type", "Line"
        )?;
        writeln!(
            f,
            "|-{}-|-{}-|-{}-|-{}-|",
            "-".repeat(w0),
            "-".repeat(w1),
            "-".repeat(w2),
            "-".repeat(w3)
        )?;
        for (idx, token) in self.tokens.iter().enumerate() {
            writeln!(
                f,
                "| {:>w0$} | {:<w1$} | {:<w2$} | {:>w3$} |",
                idx + 1,
                token.value,
                token.category.tag(),
                token.line
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total tokens found: {}", self.tokens.len())
    }
}

pub fn render_table(title: &str, tokens: &[Token]) -> String {
    TokenTable::new(title, tokens).to_string()
}
