//! Listener lifecycle: bind, serve, drain on shutdown.

use crate::api::{self, AppState};
use crate::{DeckError, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

/// Bind the HTTP listener
pub async fn bind(addr: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listener bound");
    Ok(listener)
}

/// Serve requests until `shutdown` resolves, then give in-flight requests
/// up to `drain_timeout` to finish.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
    drain_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr: SocketAddr = listener.local_addr()?;
    let router = api::build_router(state);
    let (stopping_tx, stopping_rx) = tokio::sync::oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                let _ = stopping_tx.send(());
            })
            .await
    });

    info!(addr = %local_addr, "server started");

    tokio::select! {
        finished = &mut server => return flatten(finished),
        _ = stopping_rx => {
            info!("stopping server");
        }
    }

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(finished) => {
            flatten(finished)?;
            info!("server stopped correctly");
            Ok(())
        }
        Err(_) => {
            warn!(
                timeout_secs = drain_timeout.as_secs(),
                "in-flight requests did not finish before the shutdown timeout"
            );
            Ok(())
        }
    }
}

fn flatten(
    finished: std::result::Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    match finished {
        Ok(result) => Ok(result?),
        Err(e) => Err(DeckError::internal(format!("server task failed: {}", e))),
    }
}

/// Resolve once SIGINT or SIGTERM arrives
pub async fn shutdown_signal() {
    let interrupt = until_signal("SIGINT", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = until_signal("SIGTERM", async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        stream.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    info!(signal = received, "shutdown requested");
}

/// Resolve with `name` when `wait` completes. If the handler cannot be
/// installed this never resolves, so the other signal still governs shutdown.
async fn until_signal<F>(name: &'static str, wait: F) -> &'static str
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = wait.await {
        error!(signal = name, error = %err, "failed to install signal handler");
        std::future::pending::<()>().await;
    }
    name
}
