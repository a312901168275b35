use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dns_parser::Packet;
use ptrwalk_common::error::ResolverError;
use ptrwalk_common::utils::ip;
use ptrwalk_core::resolver::AddressResolver;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// Fails every lookup and remembers which addresses it was asked about.
#[derive(Default)]
pub struct FailingResolver {
    pub calls: Mutex<Vec<Ipv4Addr>>,
}

#[async_trait]
impl AddressResolver for FailingResolver {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn resolve(&self, addr: Ipv4Addr) -> Result<Option<String>, ResolverError> {
        self.calls.lock().unwrap().push(addr);
        Err(ResolverError::NotFound)
    }
}

/// Answers from a fixed table; anything else has no record.
pub struct TableResolver {
    names: HashMap<Ipv4Addr, String>,
}

impl TableResolver {
    pub fn new(entries: &[(Ipv4Addr, &str)]) -> Arc<Self> {
        let names = entries
            .iter()
            .map(|(addr, name)| (*addr, name.to_string()))
            .collect();
        Arc::new(Self { names })
    }
}

#[async_trait]
impl AddressResolver for TableResolver {
    fn name(&self) -> &'static str {
        "table"
    }

    async fn resolve(&self, addr: Ipv4Addr) -> Result<Option<String>, ResolverError> {
        Ok(self.names.get(&addr).cloned())
    }
}

/// A tiny UDP name server on localhost.
///
/// Known addresses get a PTR answer, `silent` ones get nothing back and
/// everything else gets `NXDOMAIN`.
pub struct FakeDnsServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeDnsServer {
    pub async fn start(names: &[(Ipv4Addr, &str)], silent: &[Ipv4Addr]) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        let names: HashMap<String, String> = names
            .iter()
            .map(|(host, name)| (ip::reverse_address_to_ptr(host), name.to_string()))
            .collect();
        let silent: HashSet<String> = silent.iter().map(ip::reverse_address_to_ptr).collect();

        let handle = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            loop {
                let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                    break;
                };
                let query = buf[..len].to_vec();
                let Ok(packet) = Packet::parse(&query) else {
                    continue;
                };
                let Some(question) = packet.questions.first() else {
                    continue;
                };
                let qname = question.qname.to_string();
                if silent.contains(&qname) {
                    continue;
                }
                let reply = build_reply(&query, names.get(&qname).map(String::as_str));
                let _ = socket.send_to(&reply, peer).await;
            }
        });

        Self { addr, handle }
    }
}

impl Drop for FakeDnsServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Reuses the query's header and question, flips it into a response and
/// appends a PTR answer pointing back at the question name.
fn build_reply(query: &[u8], answer: Option<&str>) -> Vec<u8> {
    let mut reply: Vec<u8> = query.to_vec();
    reply[2] |= 0x80;
    match answer {
        Some(name) => {
            reply[3] &= 0xF0;
            reply[6] = 0;
            reply[7] = 1;
            let mut rdata: Vec<u8> = Vec::new();
            for label in name.split('.').filter(|l| !l.is_empty()) {
                rdata.push(label.len() as u8);
                rdata.extend_from_slice(label.as_bytes());
            }
            rdata.push(0);
            reply.extend_from_slice(&[0xC0, 0x0C]);
            reply.extend_from_slice(&12u16.to_be_bytes());
            reply.extend_from_slice(&1u16.to_be_bytes());
            reply.extend_from_slice(&60u32.to_be_bytes());
            reply.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            reply.extend_from_slice(&rdata);
        }
        None => {
            reply[3] = (reply[3] & 0xF0) | 3;
        }
    }
    reply
}
