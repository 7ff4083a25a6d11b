use anyhow::Context;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::{TcpListener, TcpStream};
use tracing::info;

pub const DEFAULT_PORT: u16 = 1024;
pub const DEFAULT_HOST: &str = "localhost";

/// Binds `port` on all interfaces and waits for exactly one peer.
pub async fn listen(port: u16) -> anyhow::Result<TcpStream> {
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(address).await.context("bind")?;
    info!(%address, "waiting for opponent");
    let (stream, peer) = listener.accept().await.context("accept")?;
    info!(%peer, "opponent connected");
    prepare(stream)
}

/// Dials `host:port` once; no retries.
pub async fn connect(host: &str, port: u16) -> anyhow::Result<TcpStream> {
    let stream = TcpStream::connect((host, port)).await
        .with_context(|| format!("connect {}:{}", host, port))?;
    if let Ok(peer) = stream.peer_addr() {
        info!(%peer, "connected to opponent");
    }
    prepare(stream)
}

fn prepare(stream: TcpStream) -> anyhow::Result<TcpStream> {
    //Frames are tiny, send each one immediately
    stream.set_nodelay(true).context("setsockopt")?;
    Ok(stream)
}
