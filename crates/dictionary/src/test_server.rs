//! In-process HTTP server for exercising the client without the network.
//!
//! Each server accepts a single connection. Enabled for this crate's tests and,
//! through the `test-util` feature, for dependants.

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

pub struct OneShotServer {
    pub api_url: String,
    request_line: oneshot::Receiver<String>,
}

impl OneShotServer {
    /// Answers with `status` and a JSON `body`.
    pub async fn respond(status: &str, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        Self::respond_raw(response).await
    }

    /// Writes `response` verbatim, then closes the connection.
    pub async fn respond_raw(response: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let read = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..read]);
            let _ = tx.send(request.lines().next().unwrap_or_default().to_owned());
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        Self {
            api_url: api_url(addr),
            request_line: rx,
        }
    }

    /// Accepts the connection but never answers.
    pub async fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            // held open until the client hangs up
            let _ = socket.read_to_end(&mut buf).await;
            let _ = tx.send(String::new());
        });
        Self {
            api_url: api_url(addr),
            request_line: rx,
        }
    }

    /// The first line of the request the server received.
    pub async fn request_line(self) -> String {
        self.request_line.await.unwrap_or_default()
    }
}

fn api_url(addr: std::net::SocketAddr) -> String {
    format!("http://{addr}/api/v2/entries/en/")
}
