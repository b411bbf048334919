use crate::config::Config;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 8080);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
}

#[test]
fn test_config_debug_lists_every_field() {
    let rendered = format!("{:?}", Config::default());
    for field in ["host", "port", "log_level", "request_timeout"] {
        assert!(rendered.contains(field), "{field} missing from {rendered}");
    }
}
