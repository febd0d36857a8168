// Unisource Language Server Protocol implementation
//
// Publishes Trojan Source findings as diagnostics:
// - Bidirectional control characters (errors when unbalanced)
// - Invisible characters (warnings)
// - Homoglyphs of ASCII letters and digits (warnings)

mod convert;
mod server;
mod settings;
mod workspace;

use tower_lsp::{LspService, Server};

/// Log to stderr; stdout carries the protocol.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env("UNISOURCE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(server::UnisourceLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
