pub mod rdap;
pub mod whois;
