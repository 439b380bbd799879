//! Loopback HTTP stub that answers a single request with a canned response.

use std::{io, net::SocketAddr};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

pub(crate) struct StubServer {
    addr: SocketAddr,
    request: JoinHandle<io::Result<String>>,
}

impl StubServer {
    /// Serve exactly one request, answering with `status` and a JSON `body`.
    pub(crate) async fn respond(status: u16, body: &str) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let response = format!(
            "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let request = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await?;
            let request = read_request(&mut stream).await?;

            stream.write_all(response.as_bytes()).await?;
            stream.shutdown().await?;

            Ok(request)
        });

        Ok(Self { addr, request })
    }

    /// A base URL on a port nothing is listening on.
    pub(crate) async fn closed_base_url() -> io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        drop(listener);

        Ok(format!("http://{addr}/api"))
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// The raw request the stub received, headers and body.
    pub(crate) async fn request(self) -> io::Result<String> {
        self.request.await.map_err(io::Error::other)?
    }

    /// First line of the received request, e.g. `GET /api/health HTTP/1.1`.
    pub(crate) async fn request_line(self) -> io::Result<String> {
        let request = self.request().await?;

        Ok(request.lines().next().unwrap_or_default().to_string())
    }

    /// Body of the received request.
    pub(crate) async fn request_body(self) -> io::Result<String> {
        let request = self.request().await?;

        Ok(request
            .split_once("\r\n\r\n")
            .map(|(_, body)| body.to_string())
            .unwrap_or_default())
    }
}

async fn read_request(stream: &mut TcpStream) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let read = stream.read(&mut chunk).await?;

        if read == 0 {
            break;
        }

        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());

        if is_complete(&buffer) {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn is_complete(buffer: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buffer);

    let Some((headers, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };

    let content_length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    body.len() >= content_length
}
