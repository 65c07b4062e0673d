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

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity};

use crate::{
    messages::{Language, MessageKind},
    utils::LineIndex,
};

use super::new_diagnostic;

/// One bracket occurrence. `column` counts UTF-16 code units.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SymbolToken {
    pub symbol: char,
    pub line: usize,
    pub column: usize,
}

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

/// Matches brackets with a stack and returns the unmatched ones.
///
/// Closers without a matching opener on top of the stack are reported in text
/// order, followed by every opener left on the stack, earliest first. String
/// literals and comments are not recognized, so brackets inside them count.
pub fn find_unmatched_symbols(text: &str) -> Vec<SymbolToken> {
    let mut stack: Vec<SymbolToken> = Vec::new();
    let mut errors = Vec::new();

    for (line, line_text) in text.split('\n').enumerate() {
        let mut column = 0;
        for symbol in line_text.chars() {
            let token = SymbolToken {
                symbol,
                line,
                column,
            };
            column += symbol.len_utf16();

            if matches!(symbol, '(' | '{' | '[') {
                stack.push(token);
            } else if let Some(opener) = opener_for(symbol) {
                if stack.last().is_some_and(|top| top.symbol == opener) {
                    stack.pop();
                } else {
                    errors.push(token);
                }
            }
        }
    }

    errors.extend(stack);
    errors
}

pub fn collect_bracket_errors(
    line_index: &LineIndex,
    language: Language,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let text = line_index.text();
    diagnostics.extend(find_unmatched_symbols(text).into_iter().map(|token| {
        new_diagnostic(
            line_index.line_range(token.line),
            DiagnosticSeverity::ERROR,
            MessageKind::IncompleteBlock,
            language,
            "",
        )
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: char, line: usize, column: usize) -> SymbolToken {
        SymbolToken {
            symbol,
            line,
            column,
        }
    }

    #[test]
    fn test_well_nested() {
        assert!(find_unmatched_symbols("").is_empty());
        assert!(find_unmatched_symbols("()[]{}").is_empty());
        assert!(find_unmatched_symbols("function f(a) {\n  return [a, (a)];\n}\n").is_empty());
    }

    #[test]
    fn test_stray_closer() {
        assert_eq!(find_unmatched_symbols("  }"), vec![token('}', 0, 2)]);
    }

    #[test]
    fn test_wrong_closer_reports_both() {
        assert_eq!(
            find_unmatched_symbols("( ]"),
            vec![token(']', 0, 2), token('(', 0, 0)]
        );
    }

    #[test]
    fn test_leftover_openers_earliest_first() {
        assert_eq!(
            find_unmatched_symbols("{\n  (\n  [x]\n}\n{"),
            vec![token('}', 3, 0), token('{', 0, 0), token('(', 1, 2), token('{', 4, 0)]
        );
    }

    #[test]
    fn test_brackets_in_strings_count() {
        assert_eq!(
            find_unmatched_symbols("console.log(\"(\");"),
            vec![token('(', 0, 11)]
        );
    }

    #[test]
    fn test_collect_bracket_errors_spans_line() {
        let text = "let a = [1, 2;\nlet b = 3;";
        let line_index = LineIndex::new(text);
        let mut diagnostics = Vec::new();
        collect_bracket_errors(&line_index, Language::En, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, line_index.line_range(0));
        assert_eq!(diagnostics[0].severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(
            diagnostics[0].message,
            "Block is incomplete. Missing closing brace, bracket, or parenthesis."
        );
    }
}
