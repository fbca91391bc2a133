//! HTTP server for Quill documents.
//!
//! Serves a single page at `/` that echoes the request parameters (headers,
//! query string, url-encoded body and decoded basic-auth credentials) as an
//! HTML table built with [`quill_markup::Document`].
//!
//! # Quick Start
//!
//! ```ignore
//! use quill_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7878,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! Other handlers can return [`HtmlDocument`] to send any document they build.

mod app;
mod error;
mod handlers;
mod html;
mod middleware;
mod params;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use quill_markup::doctype;
use state::AppState;

pub use error::ServerError;
pub use html::{HTML_CONTENT_TYPE, HtmlDocument};
pub use params::{USER_AUTH, USER_CRED, USER_NAME, read_request_parameters};

/// Layout of generated pages.
#[derive(Clone, Debug)]
pub struct PageSettings {
    /// Doctype declaration; empty for none.
    pub doctype: String,
    /// Page title and heading.
    pub title: String,
    /// Newline policy bits, see [`quill_markup::NewlineMode`].
    pub newline: u8,
    /// Class of the `<table>` element.
    pub table_class: String,
    /// Class of generated rows.
    pub row_class: String,
    /// Class of header cells.
    pub header_class: String,
    /// Class of data cells.
    pub data_class: String,
    /// Optional table caption.
    pub caption: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            doctype: doctype::HTML5.to_owned(),
            title: "Request parameters".to_owned(),
            newline: quill_markup::NewlineMode::AFTER_CLOSE.bits(),
            table_class: String::new(),
            row_class: String::new(),
            header_class: String::new(),
            data_class: String::new(),
            caption: None,
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Layout of generated pages.
    pub page: PageSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            page: PageSettings::default(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { page: config.page });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Quill config.
#[must_use]
pub fn server_config_from_quill_config(config: &quill_config::Config) -> ServerConfig {
    let document = &config.document;
    let table = &config.table;
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        page: PageSettings {
            doctype: document.doctype.clone(),
            title: document.title.clone(),
            newline: document.newline_bits(),
            table_class: table.table_class.clone(),
            row_class: table.row_class.clone(),
            header_class: table.header_class.clone(),
            data_class: table.data_class.clone(),
            caption: table.caption.clone(),
        },
    }
}
