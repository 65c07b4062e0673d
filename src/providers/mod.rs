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

use std::sync::{Arc, Mutex};

use crate::{client::TestableClient, storage::DocumentStorage};

pub mod configuration;
pub mod diagnostics;
pub mod document;
pub mod hover;

pub type RpcResult<T> = tower_lsp::jsonrpc::Result<T>;

#[derive(Clone)]
pub struct ProviderContext {
    pub storage: Arc<Mutex<DocumentStorage>>,
    pub client: TestableClient,
}

impl ProviderContext {
    #[cfg(test)]
    pub fn new_for_testing() -> Self {
        Self {
            storage: Arc::new(Mutex::new(DocumentStorage::new())),
            client: TestableClient::new_for_testing(),
        }
    }
}
