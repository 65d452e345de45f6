//! In-memory CSV document: the full line array of one file.

use csvbind_codec::split_line;

const BOM: char = '\u{feff}';

/// Where a document is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// No lines at all.
    Empty,
    /// A header line and no data rows.
    HeaderOnly,
    /// A header line and at least one data row.
    Populated,
}

/// Ordered text lines; line 0 is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvDocument {
    lines: Vec<String>,
}

impl CsvDocument {
    /// Split file text into lines. Accepts `\n` and `\r\n`; a leading
    /// byte-order mark is dropped.
    ///
    /// Text made only of blank lines has no header and parses as empty.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Self::default();
        }
        Self { lines }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn state(&self) -> DocumentState {
        match self.lines.len() {
            0 => DocumentState::Empty,
            1 => DocumentState::HeaderOnly,
            _ => DocumentState::Populated,
        }
    }

    /// Tokenized header, if the document has one.
    pub fn header(&self) -> Option<Vec<String>> {
        self.lines.first().map(|line| split_line(line))
    }

    /// Data rows (everything after the header).
    pub fn data_lines(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replace data row `index` (0-based, header excluded).
    pub fn replace_data_line(&mut self, index: usize, line: String) {
        self.lines[index + 1] = line;
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render back to file text; every line ends with `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// 1-based file line number of a 0-based data row.
pub(crate) fn file_line(data_index: usize) -> usize {
    data_index + 2
}
