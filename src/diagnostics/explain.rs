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

use std::sync::OnceLock;

use regex::Regex;
use tower_lsp::lsp_types::Position;

use crate::{
    dialect::Dialect,
    messages::{Entry, Language, MessageKind, UNDEFINED_VARIABLE_HINT},
    utils::LineIndex,
};

use super::{
    brackets::find_unmatched_symbols, declared::collect_declared,
    undefined::first_undefined_in_line, unused::find_unused_functions,
};

fn function_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u:\b)function(?-u:\b)").unwrap())
}

fn bilingual(entry: &Entry) -> String {
    format!(
        "📝 {}\n🇮🇳 {}",
        entry.get(Language::En).render(""),
        entry.get(Language::Hi).render("")
    )
}

/// Explains the most relevant problem on the line of `position`, in both
/// languages, as markdown.
///
/// Bracket errors win over undefined references, which win over unused
/// functions.
pub fn explain_at(dialect: Dialect, text: &str, position: Position) -> Option<String> {
    let line_index = LineIndex::new(text);
    line_index.offset(position)?;
    let line = position.line as usize;
    let line_text = line_index.line(line)?;

    if find_unmatched_symbols(text)
        .iter()
        .any(|token| token.line == line)
    {
        let (title, kind) = if dialect.is_scripting() && function_header_regex().is_match(line_text)
        {
            (
                "Incomplete function signature",
                MessageKind::IncompleteFunctionSignature,
            )
        } else {
            ("Incomplete block", MessageKind::IncompleteBlock)
        };
        return Some(format!("🔴 **{title}**\n\n{}", bilingual(kind.entry())));
    }

    let declared = collect_declared(dialect, text);
    if let Some(name) = first_undefined_in_line(dialect, line_text, &declared) {
        return Some(format!(
            "🔴 **{}**\n\n{}",
            MessageKind::UndefinedVariable.render(Language::En, name),
            bilingual(&UNDEFINED_VARIABLE_HINT)
        ));
    }

    if dialect.rules().checks_unused_functions {
        if let Some(function) = find_unused_functions(text)
            .into_iter()
            .find(|function| line_index.position(function.span.start).line as usize == line)
        {
            return Some(format!(
                "⚠️ **Function '{}' is declared but never called**\n\n{}",
                function.name,
                bilingual(MessageKind::UnusedFunction.entry())
            ));
        }
    }

    None
}
