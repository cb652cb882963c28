//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use cashvm_server::{OpcodeServer, ServerConfig, ServerError};

use crate::{config::Config, CliError};

/// Resolve the server configuration from the config file and flags
pub fn server_config(
    config: &Config,
    addr: Option<String>,
    static_dirs: Vec<PathBuf>,
) -> Result<ServerConfig, CliError> {
    let addr = addr.unwrap_or_else(|| config.listen_addr.clone());
    let listen_addr: SocketAddr = addr
        .parse()
        .map_err(|_| ServerError::InvalidAddress(addr.clone()))?;

    let dirs = if static_dirs.is_empty() {
        config.static_dirs.clone()
    } else {
        static_dirs
    };

    Ok(ServerConfig::new(listen_addr).with_static_dirs(dirs))
}

/// Serve until the process is stopped
pub fn serve(server_config: ServerConfig) -> Result<(), CliError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(OpcodeServer::new(server_config).run())?;
    Ok(())
}
