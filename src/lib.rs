//! Lexical analyzer for 8086-style assembly source.
//!
//! [`tokenize`] turns a complete source text into a flat list of classified
//! [`Token`]s. It never fails; text that matches no rule becomes a symbol.

pub mod classify;
pub mod normalize;
pub mod report;
pub mod source;
pub mod tables;
pub mod token;
pub mod tokenizer;
pub mod worker;

pub use token::{Category, Token};
pub use tokenizer::{Lexer, tokenize};
