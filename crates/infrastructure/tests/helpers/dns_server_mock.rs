#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;

/// What the mock server answers to every PTR query.
#[derive(Debug, Clone, Default)]
pub struct MockAnswer {
    pub names: Vec<String>,
    pub rcode: u8,
    /// Answer UDP queries with TC set and no records.
    pub truncate_udp: bool,
    /// Rewrite the response ID so it no longer matches the query.
    pub wrong_id: bool,
}

impl MockAnswer {
    pub fn names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            rcode: RCODE_NOERROR,
            ..Default::default()
        }
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Default::default()
        }
    }
}

/// Loopback DNS server listening on the same port for UDP and TCP.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(answer: MockAnswer) -> Result<Self, std::io::Error> {
        let (listener, socket) = Self::bind_pair().await?;
        let addr = listener.local_addr()?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_answer = answer.clone();
        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let response = build_ptr_response(&buf[..len], &udp_answer, true);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            let answer = answer.clone();
                            let count = Arc::clone(&tcp_count);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                while stream.read_exact(&mut len_buf).await.is_ok() {
                                    let len = u16::from_be_bytes(len_buf) as usize;
                                    let mut query = vec![0u8; len];
                                    if stream.read_exact(&mut query).await.is_err() {
                                        break;
                                    }
                                    count.fetch_add(1, Ordering::SeqCst);
                                    let response = build_ptr_response(&query, &answer, false);
                                    let prefix = (response.len() as u16).to_be_bytes();
                                    if stream.write_all(&prefix).await.is_err()
                                        || stream.write_all(&response).await.is_err()
                                    {
                                        break;
                                    }
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    async fn bind_pair() -> Result<(TcpListener, UdpSocket), std::io::Error> {
        let mut last_err = None;
        for _ in 0..10 {
            let listener = TcpListener::bind("127.0.0.1:0").await?;
            let addr = listener.local_addr()?;
            match UdpSocket::bind(addr).await {
                Ok(socket) => return Ok((listener, socket)),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| std::io::Error::other("no free port")))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn question_end(query: &[u8]) -> Option<usize> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    let end = pos + 4;
    (end <= query.len()).then_some(end)
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn build_ptr_response(query: &[u8], answer: &MockAnswer, over_udp: bool) -> Vec<u8> {
    let Some(qend) = question_end(query) else {
        return vec![];
    };

    let truncated = over_udp && answer.truncate_udp;
    let names: &[String] = if truncated || answer.rcode != RCODE_NOERROR {
        &[]
    } else {
        &answer.names
    };

    let mut response = Vec::with_capacity(512);

    if answer.wrong_id {
        response.extend_from_slice(&[query[0] ^ 0xff, query[1]]);
    } else {
        response.extend_from_slice(&query[0..2]);
    }

    // QR=1, RD=1, optional TC
    response.push(0x81 | if truncated { 0x02 } else { 0x00 });
    // RA=1 + rcode
    response.push(0x80 | (answer.rcode & 0x0f));

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(names.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..qend]);

    for name in names {
        let rdata = encode_name(name);
        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to question name
            0x00, 0x0c, // PTR
            0x00, 0x01, // IN
            0x00, 0x00, 0x0e, 0x10, // TTL 3600
        ]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name() {
        assert_eq!(
            encode_name("dns.google."),
            vec![3, b'd', b'n', b's', 6, b'g', b'o', b'o', b'g', b'l', b'e', 0]
        );
    }

    #[test]
    fn test_short_query_yields_empty_response() {
        let response = build_ptr_response(&[0xab, 0xcd, 0x01], &MockAnswer::default(), true);
        assert!(response.is_empty());
    }
}
