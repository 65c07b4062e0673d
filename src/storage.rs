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

use std::{collections::BTreeMap, sync::Arc};

use tower_lsp::lsp_types::Url;

use crate::{
    dialect::Dialect,
    error::{Error, Result},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    pub uri: Url,
    pub language_id: String,
    pub data: String,
    pub version: i32,
}

impl Document {
    pub fn new(uri: &Url, language_id: &str, data: String, version: i32) -> Arc<Self> {
        Arc::new(Self {
            uri: uri.clone(),
            language_id: language_id.to_string(),
            data,
            version,
        })
    }

    /// Returns `None` for languages the checks do not support.
    pub fn dialect(&self) -> Option<Dialect> {
        Dialect::from_language_id(&self.language_id)
    }

    /// Whether the editor has never saved the document to disk.
    pub fn is_untitled(&self) -> bool {
        self.uri.scheme() == "untitled"
    }
}

/// The latest known text of each open document.
#[derive(Default)]
pub struct DocumentStorage {
    memory_docs: BTreeMap<Url, Arc<Document>>,
}

impl DocumentStorage {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn read(&self, uri: &Url) -> Result<Arc<Document>> {
        self.memory_docs.get(uri).cloned().ok_or(Error::NotFound)
    }

    /// Stores a document. Returns `false` and keeps the stored document if it
    /// is newer than `version`.
    pub fn load_to_memory(&mut self, uri: &Url, language_id: &str, data: &str, version: i32) -> bool {
        if self
            .memory_docs
            .get(uri)
            .is_some_and(|doc| doc.version > version)
        {
            return false;
        }
        self.memory_docs.insert(
            uri.clone(),
            Document::new(uri, language_id, data.to_string(), version),
        );
        true
    }

    /// Replaces the text of an open document, keeping its language.
    pub fn update(&mut self, uri: &Url, data: &str, version: i32) -> Result<bool> {
        let language_id = self.read(uri)?.language_id.clone();
        Ok(self.load_to_memory(uri, &language_id, data, version))
    }

    pub fn unload_from_memory(&mut self, uri: &Url) {
        self.memory_docs.remove(uri);
    }

    pub fn memory_docs(&self) -> Vec<Arc<Document>> {
        self.memory_docs.values().cloned().collect()
    }
}
