//! One-shot HTTP responders for catalog tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use super::{ProductSource, RemoteCatalog};

async fn respond(mut socket: TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Answers exactly one request with the given status line and body.
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        respond(socket, status, body).await;
    });

    format!("http://{addr}/products")
}

/// Like [`serve_once`], but holds the response until `release` fires.
/// `received` fires once the request has arrived.
pub async fn serve_on_release(
    body: &'static str,
    received: oneshot::Sender<()>,
    release: oneshot::Receiver<()>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = received.send(());
        let _ = release.await;
        respond(socket, "200 OK", body).await;
    });

    format!("http://{addr}/products")
}

pub fn remote_catalog(endpoint: String) -> RemoteCatalog {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    RemoteCatalog::with_client(endpoint, client)
}

pub fn remote_source(endpoint: String) -> ProductSource {
    ProductSource::Remote(remote_catalog(endpoint))
}
