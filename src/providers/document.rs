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

use serde::Deserialize;
use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams, Url,
};

use super::{
    diagnostics::{publish_diagnostics, unpublish_diagnostics},
    ProviderContext,
};

/// Method name of the notification sent when the editor activates a document.
pub const DID_CHANGE_ACTIVE_DOCUMENT: &str = "hoverErrors/didChangeActiveDocument";

#[derive(Clone, Debug, Deserialize)]
pub struct DidChangeActiveDocumentParams {
    pub uri: Url,
}

pub async fn did_open(context: &ProviderContext, params: DidOpenTextDocumentParams) {
    let document = params.text_document;
    tracing::debug!("Opened {} ({})", document.uri, document.language_id);

    context.storage.lock().unwrap().load_to_memory(
        &document.uri,
        &document.language_id,
        &document.text,
        document.version,
    );

    publish_diagnostics(context, &document.uri).await;
}

pub async fn did_change(context: &ProviderContext, params: DidChangeTextDocumentParams) {
    let Some(change) = params.content_changes.last() else {
        return;
    };
    let uri = &params.text_document.uri;

    let updated = context
        .storage
        .lock()
        .unwrap()
        .update(uri, &change.text, params.text_document.version);
    match updated {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!("Ignored stale change of {uri}");
            return;
        }
        Err(err) => {
            tracing::warn!("Change of {uri} ignored: {err}");
            return;
        }
    }

    publish_diagnostics(context, uri).await;
}

pub async fn did_change_active_document(
    context: &ProviderContext,
    params: DidChangeActiveDocumentParams,
) {
    publish_diagnostics(context, &params.uri).await;
}

pub async fn did_close(context: &ProviderContext, params: DidCloseTextDocumentParams) {
    let uri = &params.text_document.uri;

    // Unload first so that a publish still in flight finds nothing to report.
    context.storage.lock().unwrap().unload_from_memory(uri);

    unpublish_diagnostics(context, uri).await;
}

#[cfg(test)]
mod tests {
    use tower_lsp::lsp_types::{
        TextDocumentContentChangeEvent, TextDocumentIdentifier, TextDocumentItem,
        VersionedTextDocumentIdentifier,
    };

    use super::*;

    fn uri() -> Url {
        Url::parse("file:///work/app.ts").unwrap()
    }

    fn open_params(text: &str) -> DidOpenTextDocumentParams {
        DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri(),
                language_id: "typescript".to_string(),
                version: 1,
                text: text.to_string(),
            },
        }
    }

    fn change_params(text: &str, version: i32) -> DidChangeTextDocumentParams {
        DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: uri(),
                version,
            },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: None,
                range_length: None,
                text: text.to_string(),
            }],
        }
    }

    fn published(context: &ProviderContext) -> Vec<String> {
        context.client.testing().published.lock().unwrap()[&uri()]
            .iter()
            .map(|diagnostic| diagnostic.message.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_document_lifecycle() {
        let context = ProviderContext::new_for_testing();

        did_open(&context, open_params("console.log(x);")).await;
        assert_eq!(published(&context), vec!["Variable 'x' is not defined"]);

        did_change(&context, change_params("let x = 1;\nconsole.log(x);", 2)).await;
        assert!(published(&context).is_empty());

        did_change(&context, change_params("console.log(y);", 3)).await;
        assert_eq!(published(&context), vec!["Variable 'y' is not defined"]);

        did_close(
            &context,
            DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri() },
            },
        )
        .await;
        assert!(published(&context).is_empty());
        assert!(context.storage.lock().unwrap().read(&uri()).is_err());
    }

    #[tokio::test]
    async fn test_publish_after_close_is_dropped() {
        let context = ProviderContext::new_for_testing();

        did_open(&context, open_params("console.log(x);")).await;
        did_close(
            &context,
            DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri() },
            },
        )
        .await;
        let count = *context.client.testing().publish_count.lock().unwrap();

        publish_diagnostics(&context, &uri()).await;
        assert!(published(&context).is_empty());
        assert_eq!(*context.client.testing().publish_count.lock().unwrap(), count);
    }

    #[tokio::test]
    async fn test_stale_change_does_not_publish() {
        let context = ProviderContext::new_for_testing();

        did_open(&context, open_params("console.log(x);")).await;
        did_change(&context, change_params("console.log(y);", 3)).await;
        did_change(&context, change_params("console.log(z);", 2)).await;

        assert_eq!(published(&context), vec!["Variable 'y' is not defined"]);
        assert_eq!(*context.client.testing().publish_count.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_active_document_republishes() {
        let context = ProviderContext::new_for_testing();

        did_open(&context, open_params("console.log(x);")).await;
        context.client.testing().published.lock().unwrap().clear();

        did_change_active_document(&context, DidChangeActiveDocumentParams { uri: uri() }).await;
        assert_eq!(published(&context), vec!["Variable 'x' is not defined"]);
    }

    #[tokio::test]
    async fn test_change_of_unopened_document_is_ignored() {
        let context = ProviderContext::new_for_testing();

        did_change(&context, change_params("console.log(y);", 1)).await;
        assert_eq!(*context.client.testing().publish_count.lock().unwrap(), 0);
    }
}
