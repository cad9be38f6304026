use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use anyhow::ensure;

/// An inclusive span of addresses of a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    pub start_addr: IpAddr,
    pub end_addr: IpAddr,
}

/// A network written as `address/prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    pub network: IpAddr,
    pub prefix: u8,
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl IpRange {
    pub fn new(start_addr: IpAddr, end_addr: IpAddr) -> anyhow::Result<Self> {
        ensure!(
            start_addr.is_ipv4() == end_addr.is_ipv4(),
            "range {start_addr} - {end_addr} mixes address families"
        );
        ensure!(
            to_bits(start_addr) <= to_bits(end_addr),
            "range start {start_addr} is after range end {end_addr}"
        );
        Ok(Self {
            start_addr,
            end_addr,
        })
    }

    /// Splits the range into the smallest list of aligned CIDR blocks covering it.
    pub fn to_cidrs(&self) -> Vec<Cidr> {
        let width: u32 = if self.start_addr.is_ipv4() { 32 } else { 128 };
        let end: u128 = to_bits(self.end_addr);
        let mut cursor: u128 = to_bits(self.start_addr);
        let mut blocks: Vec<Cidr> = Vec::new();

        loop {
            let alignment: u32 = cursor.trailing_zeros().min(width);
            let remaining: u128 = end - cursor;
            let span: u32 = match remaining.checked_add(1) {
                Some(count) => 127 - count.leading_zeros(),
                None => 128,
            };
            let host_bits: u32 = alignment.min(span);

            blocks.push(Cidr {
                network: from_bits(cursor, self.start_addr.is_ipv4()),
                prefix: (width - host_bits) as u8,
            });

            let Some(next) = 1u128
                .checked_shl(host_bits)
                .and_then(|size| cursor.checked_add(size))
            else {
                break;
            };
            if next > end {
                break;
            }
            cursor = next;
        }

        blocks
    }
}

fn to_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

fn from_bits(bits: u128, ipv4: bool) -> IpAddr {
    if ipv4 {
        IpAddr::V4(Ipv4Addr::from(bits as u32))
    } else {
        IpAddr::V6(Ipv6Addr::from(bits))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
