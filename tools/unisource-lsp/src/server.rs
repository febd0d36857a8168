// Unisource LSP Server implementation

use serde_json::Value;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DidChangeConfigurationParams, DidChangeTextDocumentParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, DidSaveTextDocumentParams, InitializeParams, InitializeResult,
    InitializedParams, MessageType, SaveOptions, ServerCapabilities, ServerInfo,
    TextDocumentSyncCapability, TextDocumentSyncKind, TextDocumentSyncOptions,
    TextDocumentSyncSaveOptions, Url,
};
use tower_lsp::{Client, LanguageServer};

use crate::convert::PositionEncoding;
use crate::settings;
use crate::workspace::Workspace;

/// Unisource Language Server
pub struct UnisourceLanguageServer {
    client: Client,
    workspace: Workspace,
}

impl UnisourceLanguageServer {
    pub fn new(client: Client) -> Self {
        UnisourceLanguageServer {
            client,
            workspace: Workspace::new(),
        }
    }

    /// Lint a document and publish its diagnostics.
    async fn publish(&self, uri: Url) {
        let Some(diagnostics) = self.workspace.diagnostics(&uri) else {
            return;
        };
        tracing::debug!(%uri, count = diagnostics.len(), "publishing diagnostics");
        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }

    /// Apply client settings, reporting malformed ones to the user.
    async fn apply_settings(&self, value: Option<&Value>) {
        match settings::resolve(value) {
            Ok(settings) => {
                let config = settings.to_config();
                tracing::info!(?config, "lint settings updated");
                self.workspace.set_config(config);
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed settings");
                self.client
                    .log_message(
                        MessageType::WARNING,
                        format!("unisource: ignoring malformed settings: {err}"),
                    )
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for UnisourceLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let encoding = PositionEncoding::negotiate(&params.capabilities);
        tracing::info!(?encoding, "negotiated position encoding");
        self.workspace.set_encoding(encoding);
        self.apply_settings(params.initialization_options.as_ref())
            .await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                position_encoding: Some(encoding.kind()),
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(false),
                        })),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "unisource-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "unisource language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        self.workspace.replace(uri.clone(), params.text_document.text);
        self.publish(uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        // Full sync: the last change holds the whole text.
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };
        self.workspace.replace(uri.clone(), change.text);
        self.publish(uri).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(text) = params.text {
            self.workspace.replace(uri.clone(), text);
        }
        self.publish(uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.workspace.close(&uri);
        self.client
            .publish_diagnostics(uri, Vec::new(), None)
            .await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.apply_settings(Some(&params.settings)).await;
        for uri in self.workspace.open_uris() {
            self.publish(uri).await;
        }
    }
}
