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

fn needs_semicolon(line: &str) -> bool {
    let trimmed = line.trim();
    !(trimmed.is_empty()
        || trimmed.ends_with([';', '{', '}'])
        || trimmed.starts_with("//"))
}

/// Returns the numbers of the lines that look like unterminated statements.
pub fn find_missing_semicolons(text: &str) -> Vec<usize> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| needs_semicolon(line))
        .map(|(line, _)| line)
        .collect()
}

pub fn collect_missing_semicolons(
    line_index: &LineIndex,
    language: Language,
    diagnostics: &mut Vec<Diagnostic>,
) {
    diagnostics.extend(
        find_missing_semicolons(line_index.text())
            .into_iter()
            .map(|line| {
                new_diagnostic(
                    line_index.line_range(line),
                    DiagnosticSeverity::ERROR,
                    MessageKind::MissingSemicolon,
                    language,
                    "",
                )
            }),
    );
}
