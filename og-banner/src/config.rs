use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Serve Open Graph banner pages.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "OG_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub address: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "OG_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
