//! Line tokenizer for CSV text.
//!
//! Splits one line into raw field strings. A quote character toggles
//! "in quotes" state and is dropped; a delimiter inside quotes is literal.
//! Doubled quotes are not unescaped, and an unterminated quote simply runs to
//! the end of the line. Tokenizing never fails.

use csvbind_core::{DELIMITER, QUOTE};

/// Tokenizer over a single CSV line.
pub struct LineTokenizer<'a> {
    chars: std::str::Chars<'a>,
    in_quotes: bool,
    current: String,
}

impl<'a> LineTokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars(),
            in_quotes: false,
            current: String::new(),
        }
    }

    /// Split the line into fields.
    ///
    /// The last field is always emitted, so `""` yields one empty field and a
    /// trailing delimiter yields an empty trailing field.
    pub fn tokenize(mut self) -> Vec<String> {
        let mut fields = Vec::new();
        while let Some(c) = self.chars.next() {
            if c == QUOTE {
                self.in_quotes = !self.in_quotes;
            } else if c == DELIMITER && !self.in_quotes {
                fields.push(std::mem::take(&mut self.current));
            } else {
                self.current.push(c);
            }
        }
        fields.push(self.current);
        fields
    }
}

/// Split one CSV line into its raw fields.
pub fn split_line(line: &str) -> Vec<String> {
    LineTokenizer::new(line).tokenize()
}
