use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// 读取 `HOST` / `PORT`，`.env` 需在调用前由 dotenvy 加载
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(default_port, |key| env::var(key).ok())
    }

    pub fn from_lookup(default_port: u16, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = parse_or_default("HOST", lookup("HOST"), DEFAULT_HOST);
        let port = parse_or_default("PORT", lookup("PORT"), default_port);
        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, fallback = %default, "invalid config value, using default");
            default
        }
    }
}
