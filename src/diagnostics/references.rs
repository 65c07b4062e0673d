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

use crate::dialect::{Dialect, Sink};

/// A bare identifier passed to a sink call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reference<'i> {
    pub name: &'i str,
    /// Byte offset of the name within its line.
    pub offset: usize,
}

fn console_log_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"console\.log\s*\(").unwrap())
}

fn println_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"System\.out\.println\s*\(\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)").unwrap()
    })
}

fn is_bare_identifier(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap())
        .is_match(s)
}

/// Splits the arguments of a call whose opening parenthesis ends right before
/// `start`. Returns the argument spans and the offset of the closing
/// parenthesis, or `None` if the call is not closed on this line.
fn split_arguments(line: &str, start: usize) -> Option<(Vec<(usize, usize)>, usize)> {
    let mut arguments = Vec::new();
    let mut argument_start = start;
    let mut quote: Option<char> = None;
    let mut depth = 0usize;

    for (i, ch) in line[start..].char_indices() {
        let i = start + i;
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            ')' => {
                arguments.push((argument_start, i));
                return Some((arguments, i));
            }
            ',' if depth == 0 => {
                arguments.push((argument_start, i));
                argument_start = i + 1;
            }
            _ => {}
        }
    }
    None
}

fn extract_console_log_references(line: &str) -> Vec<Reference<'_>> {
    let mut references = Vec::new();
    let mut position = 0;

    while let Some(call) = console_log_regex().find_at(line, position) {
        let Some((arguments, end)) = split_arguments(line, call.end()) else {
            break;
        };
        for (start, end) in arguments {
            let argument = &line[start..end];
            let name = argument.trim();
            if is_bare_identifier(name) {
                let leading = argument.len() - argument.trim_start().len();
                references.push(Reference {
                    name,
                    offset: start + leading,
                });
            }
        }
        position = end + 1;
    }

    references
}

fn extract_println_references(line: &str) -> Vec<Reference<'_>> {
    println_regex()
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|name| Reference {
            name: name.as_str(),
            offset: name.start(),
        })
        .collect()
}

/// Extracts the bare identifiers passed to the dialect's sink calls on one
/// line. String literals, numbers and expressions are skipped.
pub fn extract_references(dialect: Dialect, line: &str) -> Vec<Reference<'_>> {
    match dialect.rules().sink {
        Sink::ConsoleLog => extract_console_log_references(line),
        Sink::PrintLn => extract_println_references(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'i>(references: &[Reference<'i>]) -> Vec<&'i str> {
        references.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_console_log_arguments() {
        let line = r#"console.log("total:", total, 42, 'a, b', user.name, $el, _x1);"#;
        let references = extract_references(Dialect::JavaScript, line);
        assert_eq!(names(&references), vec!["total", "$el", "_x1"]);
        assert_eq!(references[0].offset, line.find("total,").unwrap());
    }

    #[test]
    fn test_console_log_offsets_are_exact() {
        let line = "console.log(o)";
        assert_eq!(
            extract_references(Dialect::JavaScript, line),
            vec![Reference {
                name: "o",
                offset: 12
            }]
        );
    }

    #[test]
    fn test_parentheses_inside_strings_and_calls() {
        let line = r#"console.log("a)b", f(x, y), z)"#;
        let references = extract_references(Dialect::JavaScript, line);
        assert_eq!(names(&references), vec!["z"]);
    }

    #[test]
    fn test_multiple_calls_on_one_line() {
        let line = "console.log(a); console.log (b);";
        let references = extract_references(Dialect::TypeScript, line);
        assert_eq!(names(&references), vec!["a", "b"]);
        assert_eq!(references[1].offset, 29);
    }

    #[test]
    fn test_unclosed_call() {
        assert!(extract_references(Dialect::JavaScript, "console.log(a,").is_empty());
        assert!(extract_references(Dialect::JavaScript, "console.log(\"a)").is_empty());
    }

    #[test]
    fn test_println() {
        let line = "System.out.println( count ); System.out.println(\"hi\"); System.out.println(a + b);";
        let references = extract_references(Dialect::Java, line);
        assert_eq!(
            references,
            vec![Reference {
                name: "count",
                offset: 20
            }]
        );
    }

    #[test]
    fn test_println_ignores_console_log() {
        assert!(extract_references(Dialect::Java, "console.log(x);").is_empty());
        assert!(extract_references(Dialect::JavaScript, "System.out.println(x);").is_empty());
    }
}
