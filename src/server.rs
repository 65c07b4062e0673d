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

use tower_lsp::{
    lsp_types::{
        DidChangeConfigurationParams, DidChangeTextDocumentParams, DidCloseTextDocumentParams,
        DidOpenTextDocumentParams, Hover, HoverParams, HoverProviderCapability, InitializeParams,
        InitializeResult, InitializedParams, MessageType, ServerCapabilities, ServerInfo,
        TextDocumentSyncCapability, TextDocumentSyncKind,
    },
    LanguageServer, LspService, Server,
};

use crate::{
    client::TestableClient,
    providers::{
        document::{DidChangeActiveDocumentParams, DID_CHANGE_ACTIVE_DOCUMENT},
        ProviderContext, RpcResult,
    },
    storage::DocumentStorage,
};

struct Backend {
    context: ProviderContext,
}

impl Backend {
    pub fn new(storage: &Arc<Mutex<DocumentStorage>>, client: TestableClient) -> Self {
        Self {
            context: ProviderContext {
                storage: storage.clone(),
                client,
            },
        }
    }

    async fn did_change_active_document(&self, params: DidChangeActiveDocumentParams) {
        crate::providers::document::did_change_active_document(&self.context, params).await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> RpcResult<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        tracing::info!("Language server initialized");
        self.context
            .client
            .log_message(MessageType::INFO, "Hover errors language server initialized")
            .await;
    }

    async fn shutdown(&self) -> RpcResult<()> {
        tracing::info!("Shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        crate::providers::document::did_open(&self.context, params).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        crate::providers::document::did_change(&self.context, params).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        crate::providers::document::did_close(&self.context, params).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        crate::providers::configuration::did_change_configuration(&self.context, params).await;
    }

    async fn hover(&self, params: HoverParams) -> RpcResult<Option<Hover>> {
        Ok(crate::providers::hover::hover(&self.context, params).await?)
    }
}

pub async fn run() {
    let storage = Arc::new(Mutex::new(DocumentStorage::new()));
    let (service, socket) =
        LspService::build(move |client| Backend::new(&storage, TestableClient::new(client)))
            .custom_method(DID_CHANGE_ACTIVE_DOCUMENT, Backend::did_change_active_document)
            .finish();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    Server::new(stdin, stdout, socket).serve(service).await;
}
