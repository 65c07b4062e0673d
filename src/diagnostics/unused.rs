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

use regex::Regex;
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity};

use crate::{
    messages::{Language, MessageKind},
    utils::LineIndex,
};

use super::{
    declared::{find_function_declarations, FunctionDeclaration},
    new_diagnostic,
};

/// Counts `name(` occurrences, including the declaration itself.
fn count_call_sites(text: &str, name: &str) -> usize {
    let Ok(pattern) = Regex::new(&format!(r"(?-u:\b){}\s*\(", regex::escape(name))) else {
        return 0;
    };
    pattern.find_iter(text).count()
}

/// Returns the declared functions that never appear call-shaped anywhere but
/// in their own declaration.
///
/// Any other `name(` in the text counts as a call, including property names,
/// object keys, strings and comments.
pub fn find_unused_functions(text: &str) -> Vec<FunctionDeclaration<'_>> {
    find_function_declarations(text)
        .into_iter()
        .filter(|function| count_call_sites(text, function.name) <= 1)
        .collect()
}

pub fn collect_unused_functions(
    line_index: &LineIndex,
    language: Language,
    diagnostics: &mut Vec<Diagnostic>,
) {
    diagnostics.extend(
        find_unused_functions(line_index.text())
            .into_iter()
            .map(|function| {
                new_diagnostic(
                    line_index.range(function.span),
                    DiagnosticSeverity::WARNING,
                    MessageKind::UnusedFunction,
                    language,
                    function.name,
                )
            }),
    );
}
