//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port and exposes a `reqwest`
//! client pointed at it, plus helpers for building multipart uploads.

// Not every test file uses every helper.
#![allow(unused)]

use animdna_server::{config::AppConfig, router::create_router, state::build_app_state};
use anyhow::Result;
use axum::serve;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with the default configuration.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(AppConfig::default()).await
    }

    /// Spawns the server with the given configuration.
    pub async fn spawn_with(config: AppConfig) -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts `bytes` as the `file` part of a multipart body.
    pub async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<Response> {
        let part = Part::bytes(bytes)
            .file_name("storyboard.pdf")
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);
        Ok(self
            .client
            .post(format!("{}{}", self.address, path))
            .multipart(form)
            .send()
            .await?)
    }

    /// Posts several `file` parts in order.
    pub async fn upload_files(&self, path: &str, files: Vec<Vec<u8>>) -> Result<Response> {
        let mut form = Form::new();
        for bytes in files {
            let part = Part::bytes(bytes)
                .file_name("storyboard.pdf")
                .mime_str("application/pdf")?;
            form = form.part("file", part);
        }
        Ok(self
            .client
            .post(format!("{}{}", self.address, path))
            .multipart(form)
            .send()
            .await?)
    }

    /// Posts `body` as-is with the given content type.
    pub async fn post_raw(&self, path: &str, content_type: &str, body: Vec<u8>) -> Result<Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.address, path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?)
    }

    /// Posts a multipart body that has no `file` part.
    pub async fn upload_without_file(&self, path: &str) -> Result<Response> {
        let form = Form::new().text("note", "no document attached");
        Ok(self
            .client
            .post(format!("{}{}", self.address, path))
            .multipart(form)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked.
            let _ = tx.send(());
        }
    }
}
