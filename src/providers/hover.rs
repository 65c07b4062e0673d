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

use tower_lsp::lsp_types::{Hover, HoverContents, HoverParams, MarkupContent, MarkupKind};

use crate::{diagnostics::explain_at, error::Result};

use super::ProviderContext;

pub async fn hover(context: &ProviderContext, params: HoverParams) -> Result<Option<Hover>> {
    let position = params.text_document_position_params.position;
    let document = context
        .storage
        .lock()
        .unwrap()
        .read(&params.text_document_position_params.text_document.uri)?;

    let Some(dialect) = document.dialect() else {
        return Ok(None);
    };

    Ok(explain_at(dialect, &document.data, position).map(|value| Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: None,
    }))
}

#[cfg(test)]
mod tests {
    use tower_lsp::lsp_types::{
        Position, TextDocumentIdentifier, TextDocumentPositionParams, Url, WorkDoneProgressParams,
    };

    use crate::error::Error;

    use super::*;

    fn params(uri: &Url, line: u32) -> HoverParams {
        HoverParams {
            text_document_position_params: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri: uri.clone() },
                position: Position { line, character: 0 },
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
        }
    }

    #[tokio::test]
    async fn test_hover() {
        let context = ProviderContext::new_for_testing();
        let uri = Url::parse("file:///work/app.js").unwrap();
        context.storage.lock().unwrap().load_to_memory(
            &uri,
            "javascript",
            "let a = 1;\nconsole.log(b);",
            1,
        );

        let response = hover(&context, params(&uri, 1)).await.unwrap();
        let Some(Hover {
            contents: HoverContents::Markup(markup),
            range: None,
        }) = response.clone()
        else {
            panic!("unexpected hover response: {response:?}");
        };
        assert_eq!(markup.kind, MarkupKind::Markdown);
        assert!(markup.value.starts_with("🔴 **Variable 'b' is not defined**"));

        assert_eq!(hover(&context, params(&uri, 0)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_hover_unsupported_language() {
        let context = ProviderContext::new_for_testing();
        let uri = Url::parse("file:///work/notes.md").unwrap();
        context
            .storage
            .lock()
            .unwrap()
            .load_to_memory(&uri, "markdown", "(", 1);

        assert_eq!(hover(&context, params(&uri, 0)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_hover_unknown_document() {
        let context = ProviderContext::new_for_testing();
        let uri = Url::parse("file:///work/missing.js").unwrap();

        assert!(matches!(
            hover(&context, params(&uri, 0)).await,
            Err(Error::NotFound)
        ));
    }
}
