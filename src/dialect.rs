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

use std::path::Path;

/// The languages the checks know how to read.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Dialect {
    JavaScript,
    TypeScript,
    Java,
}

/// The call whose arguments are checked for undefined references.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sink {
    /// `console.log(a, "b", c)`
    ConsoleLog,
    /// `System.out.println(a)`
    PrintLn,
}

pub struct DialectRules {
    pub declaration_keywords: &'static [&'static str],
    pub builtins: &'static [&'static str],
    pub sink: Sink,
    /// Whether `function` names and parameters count as declarations.
    pub has_functions: bool,
    pub checks_semicolons: bool,
    pub checks_unused_functions: bool,
}

static SCRIPTING_RULES: DialectRules = DialectRules {
    declaration_keywords: &["let", "const", "var"],
    builtins: &[
        "console",
        "undefined",
        "null",
        "window",
        "document",
        "global",
        "process",
        "module",
        "exports",
    ],
    sink: Sink::ConsoleLog,
    has_functions: true,
    checks_semicolons: false,
    checks_unused_functions: true,
};

static JAVA_RULES: DialectRules = DialectRules {
    declaration_keywords: &[
        "int", "String", "double", "float", "boolean", "long", "short", "byte", "char", "var",
    ],
    builtins: &[
        "System",
        "out",
        "println",
        "String",
        "Integer",
        "Double",
        "Float",
        "Boolean",
        "ArrayList",
        "HashMap",
    ],
    sink: Sink::PrintLn,
    has_functions: false,
    checks_semicolons: true,
    checks_unused_functions: false,
};

impl Dialect {
    pub fn from_language_id(language_id: &str) -> Option<Self> {
        match language_id {
            "javascript" => Some(Dialect::JavaScript),
            "typescript" => Some(Dialect::TypeScript),
            "java" => Some(Dialect::Java),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "js" | "mjs" | "cjs" | "jsx" => Some(Dialect::JavaScript),
            "ts" | "tsx" => Some(Dialect::TypeScript),
            "java" => Some(Dialect::Java),
            _ => None,
        }
    }

    pub fn rules(self) -> &'static DialectRules {
        match self {
            Dialect::JavaScript | Dialect::TypeScript => &SCRIPTING_RULES,
            Dialect::Java => &JAVA_RULES,
        }
    }

    pub fn is_scripting(self) -> bool {
        matches!(self, Dialect::JavaScript | Dialect::TypeScript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_language_id() {
        assert_eq!(
            Dialect::from_language_id("javascript"),
            Some(Dialect::JavaScript)
        );
        assert_eq!(
            Dialect::from_language_id("typescript"),
            Some(Dialect::TypeScript)
        );
        assert_eq!(Dialect::from_language_id("java"), Some(Dialect::Java));
        assert_eq!(Dialect::from_language_id("python"), None);
        assert_eq!(Dialect::from_language_id("Java"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Dialect::from_path(Path::new("src/app.mjs")),
            Some(Dialect::JavaScript)
        );
        assert_eq!(
            Dialect::from_path(Path::new("src/app.tsx")),
            Some(Dialect::TypeScript)
        );
        assert_eq!(
            Dialect::from_path(Path::new("Main.java")),
            Some(Dialect::Java)
        );
        assert_eq!(Dialect::from_path(Path::new("BUILD.gn")), None);
        assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_rules() {
        assert!(Dialect::TypeScript.rules().checks_unused_functions);
        assert!(!Dialect::TypeScript.rules().checks_semicolons);
        assert!(Dialect::Java.rules().checks_semicolons);
        assert_eq!(Dialect::Java.rules().sink, Sink::PrintLn);
        assert!(Dialect::JavaScript.is_scripting());
        assert!(!Dialect::Java.is_scripting());
    }
}
