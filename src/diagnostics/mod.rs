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

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Range};

use crate::{
    diagnostics::{
        brackets::collect_bracket_errors, semicolon::collect_missing_semicolons,
        undefined::collect_undefined_references, unused::collect_unused_functions,
    },
    dialect::Dialect,
    messages::{Language, MessageKind},
    utils::LineIndex,
};

mod brackets;
mod declared;
mod explain;
mod references;
mod semicolon;
mod undefined;
mod unused;

pub use explain::explain_at;

pub const SOURCE: &str = "hover-errors";

fn new_diagnostic(
    range: Range,
    severity: DiagnosticSeverity,
    kind: MessageKind,
    language: Language,
    name: &str,
) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(severity),
        code: Some(NumberOrString::String(kind.code().to_string())),
        source: Some(SOURCE.to_string()),
        message: kind.render(language, name),
        ..Default::default()
    }
}

/// Runs every check that applies to the dialect over the whole text.
///
/// Each call starts from scratch; the result replaces any earlier one.
pub fn compute_diagnostics(dialect: Dialect, text: &str, language: Language) -> Vec<Diagnostic> {
    let rules = dialect.rules();
    let line_index = LineIndex::new(text);

    let mut diagnostics = Vec::new();
    collect_bracket_errors(&line_index, language, &mut diagnostics);
    if rules.checks_semicolons {
        collect_missing_semicolons(&line_index, language, &mut diagnostics);
    }
    collect_undefined_references(dialect, &line_index, language, &mut diagnostics);
    if rules.checks_unused_functions {
        collect_unused_functions(&line_index, language, &mut diagnostics);
    }
    diagnostics
}
