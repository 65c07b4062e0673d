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
    dialect::Dialect,
    messages::{Language, MessageKind},
    utils::LineIndex,
};

use super::{
    declared::{collect_declared, DeclaredSet},
    new_diagnostic,
    references::extract_references,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UndefinedReference<'i> {
    pub name: &'i str,
    /// Byte offset of the name within the whole text.
    pub offset: usize,
}

/// Returns the first undeclared sink argument of one line.
pub fn first_undefined_in_line<'i>(
    dialect: Dialect,
    line_text: &'i str,
    declared: &DeclaredSet,
) -> Option<&'i str> {
    extract_references(dialect, line_text)
        .into_iter()
        .map(|reference| reference.name)
        .find(|name| !declared.contains(*name))
}

/// Returns every undeclared sink argument in the text, in text order.
pub fn find_undefined_references<'i>(
    dialect: Dialect,
    line_index: &LineIndex<'i>,
    declared: &DeclaredSet,
) -> Vec<UndefinedReference<'i>> {
    let text = line_index.text();
    let mut line_start = 0;
    let mut undefined = Vec::new();

    for line_text in text.split('\n') {
        undefined.extend(
            extract_references(dialect, line_text)
                .into_iter()
                .filter(|reference| !declared.contains(reference.name))
                .map(|reference| UndefinedReference {
                    name: reference.name,
                    offset: line_start + reference.offset,
                }),
        );
        line_start += line_text.len() + 1;
    }

    undefined
}

pub fn collect_undefined_references(
    dialect: Dialect,
    line_index: &LineIndex,
    language: Language,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let declared = collect_declared(dialect, line_index.text());
    diagnostics.extend(
        find_undefined_references(dialect, line_index, &declared)
            .into_iter()
            .map(|reference| {
                new_diagnostic(
                    line_index.range(reference.offset..reference.offset + reference.name.len()),
                    DiagnosticSeverity::ERROR,
                    MessageKind::UndefinedVariable,
                    language,
                    reference.name,
                )
            }),
    );
}
