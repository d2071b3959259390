#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_AAAA: u16 = 28;

/// How the mock answers a query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Answer with whichever of the addresses matches the question type.
    Answer {
        v4: Option<[u8; 4]>,
        v6: Option<[u8; 16]>,
    },
    NxDomain,
    /// Set TC over UDP; the TCP listener on the same port answers with `v4`.
    TruncateUdp { v4: [u8; 4] },
    WrongId,
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let tcp = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_udp_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = tcp.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tokio::spawn(Self::serve_tcp(stream, behavior));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn serve_tcp(mut stream: tokio::net::TcpStream, behavior: MockBehavior) {
        let mut len_buf = [0u8; 2];
        if stream.read_exact(&mut len_buf).await.is_err() {
            return;
        }
        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        if stream.read_exact(&mut query).await.is_err() {
            return;
        }

        let v4 = match behavior {
            MockBehavior::TruncateUdp { v4 } => Some(v4),
            MockBehavior::Answer { v4, .. } => v4,
            _ => None,
        };
        let response = Self::answer(&query, 0x81, 0x80, v4, None);

        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
    }

    fn build_udp_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        match behavior {
            MockBehavior::Answer { v4, v6 } => Some(Self::answer(query, 0x81, 0x80, v4, v6)),
            MockBehavior::NxDomain => Some(Self::answer(query, 0x81, 0x83, None, None)),
            MockBehavior::TruncateUdp { .. } => Some(Self::answer(query, 0x83, 0x80, None, None)),
            MockBehavior::WrongId => {
                let mut response = Self::answer(query, 0x81, 0x80, Some([10, 0, 0, 1]), None);
                response[0] ^= 0xFF;
                Some(response)
            }
            MockBehavior::Silent => None,
        }
    }

    fn answer(
        query: &[u8],
        flags_hi: u8,
        flags_lo: u8,
        v4: Option<[u8; 4]>,
        v6: Option<[u8; 16]>,
    ) -> Vec<u8> {
        let question_end = Self::question_end(query);
        let qtype = u16::from_be_bytes([query[question_end - 4], query[question_end - 3]]);

        let rdata: Option<Vec<u8>> = match qtype {
            TYPE_A => v4.map(|ip| ip.to_vec()),
            TYPE_AAAA => v6.map(|ip| ip.to_vec()),
            _ => None,
        };

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.push(flags_hi);
        response.push(flags_lo);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, rdata.is_some() as u8]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..question_end]);

        if let Some(rdata) = rdata {
            response.extend_from_slice(&[0xc0, 0x0c]);
            response.extend_from_slice(&qtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        response
    }

    /// Offset just past QTYPE and QCLASS of the first question.
    fn question_end(query: &[u8]) -> usize {
        let mut pos = 12;
        while pos < query.len() && query[pos] != 0 {
            pos += query[pos] as usize + 1;
        }
        pos + 5
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
