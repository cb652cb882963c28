//! Server configuration

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Asset directories searched, in order, when nothing else matches.
///
/// The working directory itself is never a default; deploy the bundle
/// root explicitly with `with_static_dirs`.
pub const DEFAULT_STATIC_DIRS: [&str; 3] = ["./assets", "./assets-no-hash", "./fonts"];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,
    /// Static asset directories, searched in order
    pub static_dirs: Vec<PathBuf>,
    /// Enable CORS (default: true)
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            static_dirs: DEFAULT_STATIC_DIRS.iter().map(PathBuf::from).collect(),
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server config with the given address
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            ..Default::default()
        }
    }

    /// Replace the static asset directories
    pub fn with_static_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.static_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
}
