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

use std::fmt::Display;
#[cfg(test)]
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use itertools::Itertools;
use tower_lsp::lsp_types::{ConfigurationItem, Diagnostic, MessageType, Url};

use crate::config::{Configurations, SECTION};

#[derive(Clone)]
pub struct TestableClient {
    client: Option<tower_lsp::Client>,
    #[cfg(test)]
    testing: TestingState,
}

/// What a test client serves and records in place of a real editor.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct TestingState {
    pub configurations: Arc<Mutex<Configurations>>,
    pub published: Arc<Mutex<BTreeMap<Url, Vec<Diagnostic>>>>,
    pub publish_count: Arc<Mutex<usize>>,
}

impl TestableClient {
    pub fn new(client: tower_lsp::Client) -> Self {
        Self {
            client: Some(client),
            #[cfg(test)]
            testing: TestingState::default(),
        }
    }

    #[cfg(test)]
    pub fn new_for_testing() -> Self {
        Self {
            client: None,
            testing: TestingState::default(),
        }
    }

    #[cfg(test)]
    pub fn testing(&self) -> &TestingState {
        &self.testing
    }

    pub async fn log_message<M: Display>(&self, typ: MessageType, message: M) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }

    /// Fetches the configurations from the client. Any failure yields the
    /// defaults.
    pub async fn configurations(&self) -> Configurations {
        let Some(client) = &self.client else {
            #[cfg(test)]
            return self.testing.configurations.lock().unwrap().clone();
            #[cfg(not(test))]
            return Configurations::default();
        };

        let values = match client
            .configuration(vec![ConfigurationItem {
                scope_uri: None,
                section: Some(SECTION.to_string()),
            }])
            .await
        {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!("Failed to fetch configurations: {err}");
                return Configurations::default();
            }
        };

        let Ok(value) = values.into_iter().exactly_one() else {
            return Configurations::default();
        };

        serde_json::from_value(value).unwrap_or_default()
    }

    pub async fn publish_diagnostics(
        &self,
        uri: Url,
        diags: Vec<Diagnostic>,
        version: Option<i32>,
    ) {
        if let Some(client) = &self.client {
            client.publish_diagnostics(uri, diags, version).await;
            return;
        }
        #[cfg(test)]
        {
            *self.testing.publish_count.lock().unwrap() += 1;
            self.testing.published.lock().unwrap().insert(uri, diags);
        }
    }
}
