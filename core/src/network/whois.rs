use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Replies longer than this are cut off; a bulk answer for one address is a
/// single line.
pub const MAX_RESPONSE_BYTES: u64 = 64 * 1024;

/// Sends a raw WHOIS request and reads the reply until the server closes.
pub async fn query(server: &str, request: &str, io_timeout: Duration) -> anyhow::Result<String> {
    let mut stream: TcpStream = timeout(io_timeout, TcpStream::connect(server))
        .await
        .with_context(|| format!("connection to {server} timed out"))?
        .with_context(|| format!("cannot connect to {server}"))?;

    let response: Vec<u8> = timeout(io_timeout, exchange(&mut stream, request))
        .await
        .with_context(|| format!("{server} did not answer in time"))?
        .with_context(|| format!("WHOIS exchange with {server} failed"))?;

    Ok(String::from_utf8_lossy(&response).into_owned())
}

async fn exchange(stream: &mut TcpStream, request: &str) -> std::io::Result<Vec<u8>> {
    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;

    let mut response: Vec<u8> = Vec::new();
    stream.take(MAX_RESPONSE_BYTES).read_to_end(&mut response).await?;
    Ok(response)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
