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

//! English and Hindi (transliterated) texts for every diagnostic kind.

use std::str::FromStr;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        if value == "hi" {
            Language::Hi
        } else {
            Language::En
        }
    }
}

impl FromStr for Language {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            _ => Err(crate::error::Error::General(format!(
                "unknown language: {s} (expected en or hi)"
            ))),
        }
    }
}

#[derive(Clone, Copy)]
pub enum Text {
    Fixed(&'static str),
    Named(fn(&str) -> String),
}

impl Text {
    pub fn render(self, name: &str) -> String {
        match self {
            Text::Fixed(text) => text.to_string(),
            Text::Named(template) => template(name),
        }
    }
}

pub struct Entry {
    pub en: Text,
    pub hi: Text,
}

impl Entry {
    pub fn get(&self, language: Language) -> Text {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageKind {
    MissingSemicolon,
    UndefinedVariable,
    IncompleteBlock,
    IncompleteFunctionSignature,
    UnusedFunction,
}

fn undefined_variable_en(name: &str) -> String {
    format!("Variable '{name}' is not defined")
}

fn undefined_variable_hi(name: &str) -> String {
    format!("Variable '{name}' define nahi hai")
}

static MISSING_SEMICOLON: Entry = Entry {
    en: Text::Fixed("Missing semicolon"),
    hi: Text::Fixed("Semicolon missing hai!"),
};

static UNDEFINED_VARIABLE: Entry = Entry {
    en: Text::Named(undefined_variable_en),
    hi: Text::Named(undefined_variable_hi),
};

static INCOMPLETE_BLOCK: Entry = Entry {
    en: Text::Fixed("Block is incomplete. Missing closing brace, bracket, or parenthesis."),
    hi: Text::Fixed("Block adhura hai. Closing brace, bracket, ya parenthesis missing hai."),
};

static INCOMPLETE_FUNCTION_SIGNATURE: Entry = Entry {
    en: Text::Fixed("Function declaration incomplete. Missing parenthesis or opening brace."),
    hi: Text::Fixed(
        "Function declaration adhura hai. Parenthesis ya opening brace missing hai.",
    ),
};

static UNUSED_FUNCTION: Entry = Entry {
    en: Text::Fixed("Function is declared but never called."),
    hi: Text::Fixed("Function declare hua hai par kabhi call nahi hua."),
};

/// Shown on hover below an undefined variable.
pub static UNDEFINED_VARIABLE_HINT: Entry = Entry {
    en: Text::Fixed(
        "Make sure this variable is declared with let, const, var, or function parameter.",
    ),
    hi: Text::Fixed(
        "Check karo ki variable ko let, const, var ya function parameter se declare kiya hai ya nahi.",
    ),
};

impl MessageKind {
    pub fn entry(self) -> &'static Entry {
        match self {
            MessageKind::MissingSemicolon => &MISSING_SEMICOLON,
            MessageKind::UndefinedVariable => &UNDEFINED_VARIABLE,
            MessageKind::IncompleteBlock => &INCOMPLETE_BLOCK,
            MessageKind::IncompleteFunctionSignature => &INCOMPLETE_FUNCTION_SIGNATURE,
            MessageKind::UnusedFunction => &UNUSED_FUNCTION,
        }
    }

    /// Stable identifier reported as the diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            MessageKind::MissingSemicolon => "missing-semicolon",
            MessageKind::UndefinedVariable => "undefined-variable",
            MessageKind::IncompleteBlock => "incomplete-block",
            MessageKind::IncompleteFunctionSignature => "incomplete-function-signature",
            MessageKind::UnusedFunction => "unused-function",
        }
    }

    /// Renders the message. `name` is ignored by kinds without a placeholder.
    pub fn render(self, language: Language, name: &str) -> String {
        self.entry().get(language).render(name)
    }
}
