//! ## session
//!
//! session establishment and the operations the enumerator probes through

// -- native (pavao) session

mod native;

use std::net::{IpAddr, ToSocketAddrs};

pub use native::NativeSession;

use crate::errors::Error;

/// Identity of the target server, resolved once before the session opens.
///
/// `hostname` is the host label taken from the target string and names the
/// local mount directories; `ip` is the resolved address and is what the
/// mount command connects to, so mounting never depends on the target name
/// resolving locally.
#[derive(Debug, Clone)]
pub struct ServerIdentity {
    pub hostname: String,
    pub ip: IpAddr,
    pub port: u16,
}

impl ServerIdentity {
    /// Resolve the target host. Fatal on failure.
    pub fn resolve(host: &str, port: u16) -> Result<Self, Error> {
        let ip = match host.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => (host, port)
                .to_socket_addrs()
                .map_err(|e| Error::Resolve {
                    host: host.to_string(),
                    reason: e.to_string(),
                })?
                .map(|addr| addr.ip())
                .next()
                .ok_or_else(|| Error::Resolve {
                    host: host.to_string(),
                    reason: "no addresses found".to_string(),
                })?,
        };
        debug!("resolved {} to {}", host, ip);
        Ok(Self {
            hostname: host.to_string(),
            ip,
            port,
        })
    }
}

/// A share advertised by the server, exactly as enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareEntry {
    pub name: String,
    pub remark: String,
}

/// Operations the share enumerator runs against an open session.
///
/// Everything blocks until the transport returns or errors; the single
/// session handle is owned by the caller and never shared.
pub trait SmbSession {
    /// List every share advertised by the server.
    fn list_shares(&mut self) -> Result<Vec<ShareEntry>, Error>;
    /// List the root of `share`. This is the read probe.
    fn list_root(&mut self, share: &str) -> Result<(), Error>;
    /// Create directory `path` on `share`. First half of the write probe.
    fn create_dir(&mut self, share: &str, path: &str) -> Result<(), Error>;
    /// Remove directory `path` on `share`. Second half of the write probe.
    fn remove_dir(&mut self, share: &str, path: &str) -> Result<(), Error>;
}
