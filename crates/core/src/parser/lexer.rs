//! Word tokenizer for PostScript calculator programs.
//!
//! Splits a byte stream into whitespace-delimited words. Braces are always
//! returned as standalone words, and `%` comments are skipped.

/// Tokenizer that yields one word at a time from a calculator program.
pub struct PSWordParser<'a> {
    data: &'a [u8],
    pos: usize,
    /// Start offset of the most recently returned word
    word_pos: usize,
}

impl<'a> PSWordParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            word_pos: 0,
        }
    }

    /// Current position in stream
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Start offset of the last word returned by `next_word`.
    pub fn word_pos(&self) -> usize {
        self.word_pos
    }

    /// Peek at current byte without advancing
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Advance position by one
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Check if byte is whitespace
    fn is_whitespace(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'\x00' | b'\x0c')
    }

    /// Check if byte is a single-byte word on its own
    fn is_brace(b: u8) -> bool {
        matches!(b, b'{' | b'}')
    }

    /// Check if byte ends a word
    fn is_word_end(b: u8) -> bool {
        Self::is_whitespace(b) || Self::is_brace(b) || b == b'%'
    }

    /// Skip whitespace and comments
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if Self::is_whitespace(b) {
                self.advance();
            } else if b == b'%' {
                // Skip comment to end of line
                while let Some(c) = self.advance() {
                    if c == b'\r' || c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Returns the next word, or `None` once the input is exhausted.
    pub fn next_word(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();
        let start = self.pos;
        let first = self.advance()?;
        self.word_pos = start;
        if !Self::is_brace(first) {
            while let Some(b) = self.peek() {
                if Self::is_word_end(b) {
                    break;
                }
                self.pos += 1;
            }
        }
        let data = self.data;
        Some(&data[start..self.pos])
    }
}

impl<'a> Iterator for PSWordParser<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word()
    }
}
