use crate::{Position, ResolveError, Result};

/// Line/column to byte offset conversion (and back) over one version of a document.
///
/// Line starts are cached once per document; a new index is built whenever the
/// text is replaced.
///
/// - Lines are separated by `\n`, `\r\n` or a lone `\r`, the GraphQL line
///   terminators. The terminator is never part of the line's content.
/// - Columns count chars. Offsets are UTF-8 byte offsets, so they compare
///   directly with parser ranges.
///
/// # Example
///
/// ```
/// use graphql_console::{LineIndex, Position};
///
/// let index = LineIndex::new("query A {\n  a\n}");
///
/// let offset = index.position_to_offset(Position::new(1, 2)).unwrap();
/// assert_eq!(offset, 12);
/// assert_eq!(index.offset_to_position(12), Position::new(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the start of each line; index 0 is always 0
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let line_starts = std::iter::once(0)
            .chain(
                bytes
                    .iter()
                    .enumerate()
                    .filter(|&(offset, &byte)| {
                        byte == b'\n' || (byte == b'\r' && bytes.get(offset + 1) != Some(&b'\n'))
                    })
                    .map(|(offset, _)| offset + 1),
            )
            .collect();

        Self { text, line_starts }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of the start of `line`
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Content of `line`, without its line break
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = self.line_start(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |&next| next);
        let content = &self.text[start..end];
        let content = content.strip_suffix('\n').unwrap_or(content);
        Some(content.strip_suffix('\r').unwrap_or(content))
    }

    /// Number of chars on `line`, excluding the line break
    #[must_use]
    pub fn line_len(&self, line: usize) -> Option<usize> {
        self.line_text(line).map(|content| content.chars().count())
    }

    /// Convert a cursor position to a byte offset.
    ///
    /// Columns past the end of the line are clamped to the line's end. A line
    /// the document does not have means the editor and the document are out of
    /// sync, and is reported as [`ResolveError::InvalidPosition`].
    pub fn position_to_offset(&self, position: Position) -> Result<usize> {
        let content = self
            .line_text(position.line)
            .ok_or(ResolveError::InvalidPosition {
                line: position.line,
                line_count: self.line_count(),
            })?;

        let column = content
            .char_indices()
            .nth(position.character)
            .map_or(content.len(), |(offset, _)| offset);

        Ok(self.line_starts[position.line] + column)
    }

    /// Convert a byte offset to a cursor position.
    ///
    /// Offsets past the end of the text map to the end of the last line;
    /// offsets inside a line break map to the end of that line.
    #[must_use]
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let content = self.line_text(line).unwrap_or_default();
        let within = (offset - self.line_starts[line]).min(content.len());

        Position {
            line,
            character: content[..within].chars().count(),
        }
    }
}
