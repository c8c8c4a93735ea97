// Runtime configuration read from the environment.
//
// Variables
// - HOST       bind address, default 0.0.0.0
// - PORT       listen port, default 3000
// - DATA_FILE  path of the JSON dataset, default ./data.json

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_FILE: &str = "./data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("HOST is not an IP address: {raw}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };
        let data_file = lookup("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Ok(Self {
            host,
            port,
            data_file,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
