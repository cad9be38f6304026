use std::time::Duration;

pub const DEFAULT_POOL_SIZE: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_WHOIS_SERVER: &str = "whois.cymru.com:43";
pub const DEFAULT_RDAP_URL: &str = "https://rdap.arin.net/registry";

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of hosts looked up at the same time.
    pub pool_size: usize,
    /// Issues the RDAP query that fills in the network CIDR.
    ///
    /// When disabled only the ASN service is queried and `cidr` stays empty.
    pub include_cidr: bool,
    /// Upper bound for each individual network call (DNS, WHOIS, RDAP).
    pub timeout: Duration,
    /// `host:port` of the bulk ASN WHOIS service.
    pub whois_server: String,
    /// Base URL of the RDAP bootstrap registry, without a trailing `/ip`.
    pub rdap_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            include_cidr: true,
            timeout: DEFAULT_TIMEOUT,
            whois_server: DEFAULT_WHOIS_SERVER.to_string(),
            rdap_url: DEFAULT_RDAP_URL.to_string(),
        }
    }
}
