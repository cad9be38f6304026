use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Names the special-purpose block an address belongs to, if any.
///
/// Registries hold no ownership data for these blocks, so querying them only
/// produces noise.
pub fn reserved_block(ip: &IpAddr) -> Option<&'static str> {
    match ip {
        IpAddr::V4(v4) => reserved_block_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(mapped) => reserved_block_v4(&mapped),
            None => reserved_block_v6(v6),
        },
    }
}

fn reserved_block_v4(ip: &Ipv4Addr) -> Option<&'static str> {
    let [a, b, c, _] = ip.octets();
    match true {
        _ if ip.is_unspecified() => Some("unspecified"),
        _ if a == 0 => Some("this network (RFC 1122)"),
        _ if ip.is_loopback() => Some("loopback (RFC 1122)"),
        _ if ip.is_private() => Some("private-use (RFC 1918)"),
        _ if a == 100 && (b & 0xC0) == 64 => Some("shared address space (RFC 6598)"),
        _ if ip.is_link_local() => Some("link-local (RFC 3927)"),
        _ if a == 192 && b == 0 && c == 0 => Some("IETF protocol assignments (RFC 6890)"),
        _ if ip.is_documentation() => Some("documentation (RFC 5737)"),
        _ if a == 198 && (b & 0xFE) == 18 => Some("benchmarking (RFC 2544)"),
        _ if ip.is_multicast() => Some("multicast (RFC 5771)"),
        _ if ip.is_broadcast() => Some("limited broadcast (RFC 919)"),
        _ if a >= 240 => Some("reserved for future use (RFC 1112)"),
        _ => None,
    }
}

fn reserved_block_v6(ip: &Ipv6Addr) -> Option<&'static str> {
    let segments = ip.segments();
    match true {
        _ if ip.is_unspecified() => Some("unspecified (RFC 4291)"),
        _ if ip.is_loopback() => Some("loopback (RFC 4291)"),
        _ if ip.is_multicast() => Some("multicast (RFC 4291)"),
        _ if ip.is_unicast_link_local() => Some("link-local (RFC 4291)"),
        _ if ip.is_unique_local() => Some("unique local (RFC 4193)"),
        _ if segments[0] == 0x2001 && segments[1] == 0x0db8 => Some("documentation (RFC 3849)"),
        _ => None,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn block(s: &str) -> Option<&'static str> {
        reserved_block(&s.parse::<IpAddr>().unwrap())
    }

    #[test]
    fn public_addresses_are_not_reserved() {
        assert_eq!(block("8.8.8.8"), None);
        assert_eq!(block("1.1.1.1"), None);
        assert_eq!(block("2001:4860:4860::8888"), None);
    }

    #[test]
    fn special_purpose_v4_blocks() {
        assert!(block("10.1.2.3").unwrap().contains("RFC 1918"));
        assert!(block("192.168.0.1").unwrap().contains("RFC 1918"));
        assert!(block("127.0.0.1").unwrap().contains("loopback"));
        assert!(block("100.64.0.1").unwrap().contains("RFC 6598"));
        assert_eq!(block("100.128.0.1"), None);
        assert!(block("169.254.1.1").unwrap().contains("link-local"));
        assert!(block("203.0.113.7").unwrap().contains("documentation"));
        assert!(block("224.0.0.1").unwrap().contains("multicast"));
        assert!(block("255.255.255.255").is_some());
        assert!(block("0.0.0.0").is_some());
    }

    #[test]
    fn special_purpose_v6_blocks() {
        assert!(block("::1").unwrap().contains("loopback"));
        assert!(block("fe80::1").unwrap().contains("link-local"));
        assert!(block("fd00::1").unwrap().contains("unique local"));
        assert!(block("2001:db8::1").unwrap().contains("documentation"));
        assert!(block("ff02::1").unwrap().contains("multicast"));
    }

    #[test]
    fn mapped_v4_uses_v4_rules() {
        assert!(block("::ffff:10.0.0.1").unwrap().contains("RFC 1918"));
        assert_eq!(block("::ffff:8.8.8.8"), None);
    }
}
