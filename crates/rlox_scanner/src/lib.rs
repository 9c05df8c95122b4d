//! rlox_scanner: Lexer/tokenizer for Lox source code.
//!
//! Converts raw source text into a flat, ordered sequence of tokens in a
//! single left-to-right pass with one character of lookahead. Malformed
//! input never aborts the scan; problems are reported as diagnostics and
//! scanning resumes at the next character.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};
