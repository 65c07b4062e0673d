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

use std::{collections::HashSet, ops::Range, sync::OnceLock};

use regex::Regex;

use crate::dialect::Dialect;

/// Names considered bound anywhere in a document. There are no scopes.
///
/// Keywords are matched anywhere, even as the tail of a longer word, so
/// `outlet x` declares `x`.
pub type DeclaredSet<'i> = HashSet<&'i str>;

/// A `function name(` header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDeclaration<'i> {
    pub name: &'i str,
    /// From the `function` keyword through the end of the name.
    pub span: Range<usize>,
}

fn declaration_regex(dialect: Dialect) -> &'static Regex {
    static SCRIPTING: OnceLock<Regex> = OnceLock::new();
    static JAVA: OnceLock<Regex> = OnceLock::new();
    let cell = if dialect.is_scripting() {
        &SCRIPTING
    } else {
        &JAVA
    };
    cell.get_or_init(|| {
        let keywords = dialect.rules().declaration_keywords.join("|");
        Regex::new(&format!(r"(?:{keywords})\s+([A-Za-z0-9_]+)")).unwrap()
    })
}

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"function\s+([A-Za-z0-9_]+)\s*\(").unwrap())
}

fn parameters_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"function\s+[A-Za-z0-9_]*\s*\(([^)]*)\)").unwrap())
}

/// Finds every `function name(` header in text order.
pub fn find_function_declarations(text: &str) -> Vec<FunctionDeclaration<'_>> {
    function_regex()
        .captures_iter(text)
        .filter_map(|captures| {
            let keyword = captures.get(0)?;
            let name = captures.get(1)?;
            Some(FunctionDeclaration {
                name: name.as_str(),
                span: keyword.start()..name.end(),
            })
        })
        .collect()
}

/// Collects the declared names of a document, including the dialect builtins.
pub fn collect_declared(dialect: Dialect, text: &str) -> DeclaredSet<'_> {
    let rules = dialect.rules();
    let mut declared: DeclaredSet = rules.builtins.iter().copied().collect();

    declared.extend(
        declaration_regex(dialect)
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|name| name.as_str()),
    );

    if rules.has_functions {
        declared.extend(
            find_function_declarations(text)
                .into_iter()
                .map(|function| function.name),
        );
        for captures in parameters_regex().captures_iter(text) {
            let Some(parameters) = captures.get(1) else {
                continue;
            };
            declared.extend(
                parameters
                    .as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|parameter| !parameter.is_empty()),
            );
        }
    }

    declared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripting_declarations() {
        let declared = collect_declared(Dialect::JavaScript, "let x = 1; console.log(x);");
        assert!(declared.contains("x"));
        assert!(declared.contains("console"));
        assert!(declared.contains("exports"));
        assert!(!declared.contains("y"));
    }

    #[test]
    fn test_scripting_functions_and_parameters() {
        let text = "const a = 1;\nvar\tb;\nfunction add(left, right , ) {\n  return left + right;\n}\n";
        let declared = collect_declared(Dialect::TypeScript, text);
        for name in ["a", "b", "add", "left", "right"] {
            assert!(declared.contains(name), "{name} should be declared");
        }
        assert!(!declared.contains(""));
    }

    #[test]
    fn test_declaration_is_flat() {
        let text = "function f() {\n  let inner = 1;\n}\nconsole.log(inner);";
        let declared = collect_declared(Dialect::JavaScript, text);
        assert!(declared.contains("inner"));
    }

    #[test]
    fn test_keyword_inside_longer_word() {
        let declared = collect_declared(Dialect::JavaScript, "outlet x = 1;");
        assert!(declared.contains("x"));

        let declared = collect_declared(Dialect::Java, "MyString s = load();");
        assert!(declared.contains("s"));
    }

    #[test]
    fn test_java_declarations() {
        let text = "int count = 0;\nString name = \"a\";\nboolean done;\nObject other;";
        let declared = collect_declared(Dialect::Java, text);
        for name in ["count", "name", "done", "System", "HashMap"] {
            assert!(declared.contains(name), "{name} should be declared");
        }
        assert!(!declared.contains("other"));
        assert!(!declared.contains("console"));
    }

    #[test]
    fn test_java_ignores_functions() {
        let declared = collect_declared(Dialect::Java, "function foo(bar) {}");
        assert!(!declared.contains("foo"));
        assert!(!declared.contains("bar"));
    }

    #[test]
    fn test_find_function_declarations() {
        let text = "function foo(){}\nfunction  bar (x) {}";
        assert_eq!(
            find_function_declarations(text),
            vec![
                FunctionDeclaration {
                    name: "foo",
                    span: 0..12,
                },
                FunctionDeclaration {
                    name: "bar",
                    span: 17..30,
                },
            ]
        );
    }
}
