// SPDX-License-Identifier: MIT OR Apache-2.0

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// File name of the SQLite database inside the configured location.
pub const DATABASE_FILE: &str = "trekking.db";

/// Command line arguments, each can also be set through an environment variable.
#[derive(Debug, Parser)]
#[command(version, about = "Draw secret gift recipients over HTTP")]
pub struct Config {
    /// Address to serve on.
    #[arg(long, env = "TREKKING_ADDRESS", default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Port to serve on.
    #[arg(short, long, env = "TREKKING_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Where groups are kept.
    #[arg(long, env = "TREKKING_STORE", value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// Existing directory holding the database when using the SQLite store.
    #[arg(long, env = "TREKKING_LOCATION", default_value = "./data")]
    pub location: PathBuf,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    pub fn database_file(&self) -> PathBuf {
        self.location.join(DATABASE_FILE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Volatile, everything is lost on restart.
    Memory,

    /// Durable, kept in a SQLite database file.
    Sqlite,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{Config, StoreKind};

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["trekking-node"]).unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database_file(), PathBuf::from("./data/trekking.db"));
    }

    #[test]
    fn sqlite_store() {
        let config = Config::try_parse_from([
            "trekking-node",
            "--store",
            "sqlite",
            "--location",
            "/var/lib/trekking",
            "--address",
            "127.0.0.1",
            "-p",
            "9000",
        ])
        .unwrap();

        assert_eq!(config.store, StoreKind::Sqlite);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.database_file(),
            PathBuf::from("/var/lib/trekking/trekking.db")
        );
    }

    #[test]
    fn unknown_store() {
        assert!(Config::try_parse_from(["trekking-node", "--store", "redis"]).is_err());
    }
}
