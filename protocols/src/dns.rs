use std::net::Ipv4Addr;

use anyhow::{Context, ensure};
use dns_parser::{Packet, QueryClass, QueryType, RData, ResponseCode};
use pnet::packet::dns::{DnsClass, DnsTypes, MutableDnsPacket, Opcode, Retcode};

use ptrwalk_common::utils::ip;

pub const DNS_HDR_LEN: usize = 12;
pub const DNS_PORT: u16 = 53;
/// Classic UDP payload limit without EDNS.
pub const MAX_UDP_PAYLOAD: usize = 512;

/// What a name server said about one PTR question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PtrAnswer {
    Name(String),
    NoRecord,
}

pub fn create_ptr_packet(addr: &Ipv4Addr, id: u16) -> anyhow::Result<Vec<u8>> {
    let qname: Vec<u8> = encode_dns_name(&ip::reverse_address_to_ptr(addr))?;
    let q_fixed_len: usize = 4;
    let total: usize = DNS_HDR_LEN + qname.len() + q_fixed_len;
    let mut buffer: Vec<u8> = vec![0u8; total];

    {
        let mut dns: MutableDnsPacket =
            MutableDnsPacket::new(&mut buffer).context("creating dns header")?;
        dns.set_id(id);
        dns.set_is_response(0);
        dns.set_opcode(Opcode::StandardQuery);
        dns.set_is_authoriative(0);
        dns.set_is_truncated(0);
        dns.set_is_recursion_desirable(1);
        dns.set_is_recursion_available(0);
        dns.set_zero_reserved(0);
        dns.set_is_non_authenticated_data(0);
        dns.set_rcode(Retcode::NoError);
        dns.set_query_count(1);
        dns.set_response_count(0);
        dns.set_authority_rr_count(0);
        dns.set_additional_rr_count(0);
    }

    let mut cursor: usize = DNS_HDR_LEN;

    buffer[cursor..cursor + qname.len()].copy_from_slice(&qname);
    cursor += qname.len();

    buffer[cursor..cursor + 2].copy_from_slice(&DnsTypes::PTR.0.to_be_bytes());
    cursor += 2;

    let class_in: DnsClass = DnsClass(1);
    buffer[cursor..cursor + 2].copy_from_slice(&class_in.0.to_be_bytes());

    Ok(buffer)
}

/// Parses a reply to [`create_ptr_packet`] and returns its transaction id and answer.
///
/// `NXDOMAIN` and empty answer sections both map to [`PtrAnswer::NoRecord`].
/// Any other error code is reported as a failure.
pub fn parse_ptr_response(payload: &[u8]) -> anyhow::Result<(u16, PtrAnswer)> {
    let packet = Packet::parse(payload).context("failed to parse DNS packet")?;
    let id: u16 = packet.header.id;

    ensure!(!packet.header.query, "packet {id} is a query, not a response");

    match packet.header.response_code {
        ResponseCode::NoError => {}
        ResponseCode::NameError => return Ok((id, PtrAnswer::NoRecord)),
        code => anyhow::bail!("name server answered {code:?}"),
    }

    let ptr_question: bool = packet
        .questions
        .iter()
        .any(|q| q.qtype == QueryType::PTR && q.qclass == QueryClass::IN);
    ensure!(ptr_question, "response {id} does not answer a PTR question");

    let answer: PtrAnswer = packet
        .answers
        .iter()
        .find_map(|record| match &record.data {
            RData::PTR(ptr) => Some(PtrAnswer::Name(ptr.0.to_string())),
            _ => None,
        })
        .unwrap_or(PtrAnswer::NoRecord);

    Ok((id, answer))
}

fn encode_dns_name(name: &str) -> anyhow::Result<Vec<u8>> {
    let mut encoded: Vec<u8> = Vec::with_capacity(name.len() + 2);
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        ensure!(label.len() < 64, "label '{label}' is too long");
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    Ok(encoded)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
