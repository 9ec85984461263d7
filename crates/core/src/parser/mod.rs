//! Calculator program tokenization.
//!
//! - `lexer`: whitespace/brace word tokenizer
//! - `number`: strict numeric literal grammar
//! - `read_program`: loads program text from any reader

use std::io::Read;

use crate::error::Result;

pub mod lexer;
pub mod number;

// Re-export main types for convenience
pub use lexer::PSWordParser;
pub use number::{format_number, parse_number};

/// Reads a whole program from `reader`.
pub fn read_program(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    tracing::trace!(len = data.len(), "read program");
    Ok(data)
}
