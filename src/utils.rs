// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::ops::Range as ByteRange;

use tower_lsp::lsp_types::{Position, Range};

/// Converts between byte offsets and LSP positions.
///
/// Lines are separated by `\n` only. Characters are counted in UTF-16 code
/// units.
#[derive(Clone)]
pub struct LineIndex<'i> {
    input: &'i str,
    line_starts: Vec<usize>,
}

impl<'i> LineIndex<'i> {
    pub fn new(input: &'i str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(input.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { input, line_starts }
    }

    pub fn text(&self) -> &'i str {
        self.input
    }

    /// Returns the text of a line without its `\n` terminator.
    pub fn line(&self, line: usize) -> Option<&'i str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.input.len());
        Some(&self.input[start..end])
    }

    pub fn position(&self, offset: usize) -> Position {
        let index = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[index];
        let character = self
            .input
            .get(start..offset)
            .map(|s| s.encode_utf16().count())
            .unwrap_or(0);
        Position {
            line: index as u32,
            character: character as u32,
        }
    }

    pub fn range(&self, span: ByteRange<usize>) -> Range {
        Range {
            start: self.position(span.start),
            end: self.position(span.end),
        }
    }

    /// Returns the range covering a whole line, excluding any line terminator.
    pub fn line_range(&self, line: usize) -> Range {
        let text = self.line(line).unwrap_or_default();
        let text = text.strip_suffix('\r').unwrap_or(text);
        Range {
            start: Position::new(line as u32, 0),
            end: Position::new(line as u32, text.encode_utf16().count() as u32),
        }
    }

    pub fn offset(&self, position: Position) -> Option<usize> {
        let start = *self.line_starts.get(position.line as usize)?;
        let line = self.line(position.line as usize)?;
        let mut character = 0;
        for (i, ch) in line.char_indices() {
            if character >= position.character as usize {
                return Some(start + i);
            }
            character += ch.len_utf16();
        }
        if character >= position.character as usize {
            Some(start + line.len())
        } else {
            None
        }
    }
}
