//! Fixed characters of the CSV text format.

/// Field separator.
pub const DELIMITER: char = ',';

/// Quote character; toggles literal mode while tokenizing.
pub const QUOTE: char = '"';
