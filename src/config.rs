use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration, read from flags or the environment (`.env` included).
#[derive(Parser, Debug, Clone)]
#[command(name = "product-search")]
#[command(about = "In-memory product ingestion and name search service")]
pub struct Config {
    /// HTTP listen address.
    #[arg(long, env = "PRODUCT_SEARCH_BIND", default_value = "127.0.0.1:5001")]
    pub bind: SocketAddr,

    /// Log filter (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    #[arg(long, env = "PRODUCT_SEARCH_LOG", default_value = "info")]
    pub log_level: String,
}
