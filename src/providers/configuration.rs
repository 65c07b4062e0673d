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

use futures::future::join_all;
use tower_lsp::lsp_types::DidChangeConfigurationParams;

use super::{diagnostics::publish_diagnostics, ProviderContext};

/// Republishes every open document so that messages follow the new language.
pub async fn did_change_configuration(
    context: &ProviderContext,
    _params: DidChangeConfigurationParams,
) {
    let documents = context.storage.lock().unwrap().memory_docs();
    tracing::info!(
        "Configuration changed; rechecking {} documents",
        documents.len()
    );

    join_all(
        documents
            .iter()
            .map(|document| publish_diagnostics(context, &document.uri)),
    )
    .await;
}
