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

use tower_lsp::lsp_types::Url;

use crate::diagnostics::compute_diagnostics;

use super::ProviderContext;

pub async fn publish_diagnostics(context: &ProviderContext, uri: &Url) {
    let config = context.client.configurations().await;

    // Read the document only after the last suspension point so that the
    // published set always reflects the latest stored text.
    let Ok(document) = context.storage.lock().unwrap().read(uri) else {
        return;
    };
    if document.is_untitled() {
        return;
    }
    let Some(dialect) = document.dialect() else {
        unpublish_diagnostics(context, uri).await;
        return;
    };

    let diags = compute_diagnostics(dialect, &document.data, config.language);
    tracing::debug!(
        "Publishing {} diagnostics for {} (version {})",
        diags.len(),
        uri,
        document.version
    );

    context
        .client
        .publish_diagnostics(uri.clone(), diags, Some(document.version))
        .await;
}

pub async fn unpublish_diagnostics(context: &ProviderContext, uri: &Url) {
    context
        .client
        .publish_diagnostics(uri.clone(), Vec::new(), None)
        .await;
}
