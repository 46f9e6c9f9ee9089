//! Endpoints that misbehave at the transport level.

use std::net::TcpListener as StdTcpListener;

use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Base URL of a server that accepts connections but never writes a response.
///
/// Accepted sockets are held open until the returned task is aborted or the runtime shuts
/// down, so a client waiting on it can only finish by timing out.
pub async fn unresponsive_url() -> Result<(String, JoinHandle<()>), TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    Ok((format!("http://{}", addr), handle))
}

/// Base URL of a port nothing listens on, so connecting is refused.
pub fn refused_url() -> Result<String, TestError> {
    let listener = StdTcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}", addr))
}
