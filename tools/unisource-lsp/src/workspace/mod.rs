//! Server-side state: open documents and the active lint options.
//!
//! Handlers may run concurrently. Documents live in a `DashMap` keyed by
//! URI; the config and position encoding sit behind `RwLock`s and are
//! copied out before linting, so no lock is held across an `.await`.

use dashmap::DashMap;
use parking_lot::RwLock;
use tower_lsp::lsp_types::{Diagnostic, Url};
use unisource_engine::{lint_with, Document, LintConfig};

use crate::convert::{to_diagnostics, PositionEncoding};

#[derive(Default)]
pub struct Workspace {
    documents: DashMap<Url, Document>,
    config: RwLock<LintConfig>,
    encoding: RwLock<PositionEncoding>,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace::default()
    }

    pub fn encoding(&self) -> PositionEncoding {
        *self.encoding.read()
    }

    pub fn set_encoding(&self, encoding: PositionEncoding) {
        *self.encoding.write() = encoding;
    }

    pub fn set_config(&self, config: LintConfig) {
        *self.config.write() = config;
    }

    /// Store the full text of a document, replacing any previous snapshot.
    pub fn replace(&self, uri: Url, text: String) {
        let document = Document::new(uri.as_str(), text);
        self.documents.insert(uri, document);
    }

    /// Forget a document. Returns whether it was open.
    pub fn close(&self, uri: &Url) -> bool {
        self.documents.remove(uri).is_some()
    }

    /// Lint an open document. `None` if the document is not open.
    pub fn diagnostics(&self, uri: &Url) -> Option<Vec<Diagnostic>> {
        let config = *self.config.read();
        let encoding = self.encoding();
        let document = self.documents.get(uri)?;
        let findings = lint_with(&document, &config);
        Some(to_diagnostics(&document, &findings, encoding))
    }

    /// URIs of every open document.
    pub fn open_uris(&self) -> Vec<Url> {
        self.documents.iter().map(|entry| entry.key().clone()).collect()
    }
}
