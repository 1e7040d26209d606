//! ## creds
//!
//! credential resolution for the target session

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::errors::Error;

/// Credentials used to authenticate the session.
/// Built once from the command line or an auth file, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub domain: String,
    pub username: String,
    pub password: String,
    pub host: String,
}

/// `[[domain/]username[:password]@]host`; every component may be empty.
const TARGET_PATTERN: &str = r"^(?:(?:([^/@:]*)/)?([^@:]*)(?::([^@]*))?@)?(.*)$";

/// Parse a target string. Malformed input never fails, it yields empty
/// fields instead.
pub fn parse_target(target: &str) -> Credentials {
    let pattern = Regex::new(TARGET_PATTERN).expect("target pattern is valid");
    let caps = match pattern.captures(target) {
        Some(caps) => caps,
        None => return Credentials::default(),
    };
    let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("").to_string();
    let mut credentials = Credentials {
        domain: group(1),
        username: group(2),
        password: group(3),
        host: group(4),
    };
    // a password containing '@' spills into the host capture; the rightmost
    // '@' is the credentials/host separator
    if let Some(at) = credentials.host.rfind('@') {
        let spill = credentials.host[..at].to_string();
        credentials.host = credentials.host[at + 1..].to_string();
        credentials.password = format!("{}@{}", credentials.password, spill);
    }
    credentials
}

/// Directives read from an smbclient-style authentication file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AuthFile {
    pub domain: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Load credentials from an smbclient-style authentication file (used by
/// smbclient, mount.cifs and others). One `key=value` directive per line,
/// keys restricted to `username`, `password` and `domain`; blank lines and
/// `#` comments are ignored.
pub fn load_auth_file(path: &Path) -> Result<AuthFile, Error> {
    let content = fs::read_to_string(path).map_err(|e| Error::AuthFileIo {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut auth = AuthFile::default();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| Error::AuthFileSyntax {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: "no \"=\" present in line".to_string(),
        })?;
        let (key, value) = (key.trim(), value.trim());
        match key {
            "username" => auth.username = Some(value.to_string()),
            "password" => auth.password = Some(value.to_string()),
            "domain" => auth.domain = Some(value.to_string()),
            _ => {
                return Err(Error::AuthFileSyntax {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: format!("unknown option {:?}", key),
                });
            }
        }
    }
    Ok(auth)
}

/// Resolve the credentials for a run: parse the target string, then let the
/// auth file, if any, replace domain/username/password entirely.
pub fn resolve(target: &str, auth_file: Option<&Path>) -> Result<Credentials, Error> {
    let mut credentials = parse_target(target);
    if let Some(path) = auth_file {
        let auth = load_auth_file(path)?;
        debug!(
            "loaded auth file {}: domain={:?} username={:?}",
            path.display(),
            auth.domain,
            auth.username
        );
        credentials.domain = auth.domain.unwrap_or_default();
        credentials.username = auth.username.unwrap_or_default();
        credentials.password = auth.password.unwrap_or_default();
    }
    Ok(credentials)
}
