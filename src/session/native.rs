//! ## native
//!
//! pavao-backed SMB session

use libc::mode_t;
use pavao::{SmbClient, SmbCredentials, SmbMode, SmbOptions};

use super::{ServerIdentity, ShareEntry, SmbSession};
use crate::creds::Credentials;
use crate::errors::Error;

/// SMB session backed by `pavao::SmbClient`.
///
/// One session per process; opened once against the target and dropped when
/// the run ends.
pub struct NativeSession {
    client: SmbClient,
}

impl NativeSession {
    /// Open an authenticated session to the target.
    /// Fails if the smb context cannot be instantiated or the server rejects
    /// the credentials.
    pub fn connect(identity: &ServerIdentity, credentials: &Credentials) -> Result<Self, Error> {
        let server = format!("smb://{}:{}", identity.hostname, identity.port);
        debug!("opening session to {} as {:?}", server, credentials.username);
        let client = SmbClient::new(
            SmbCredentials::default()
                .server(server)
                .share("")
                .username(credentials.username.as_str())
                .password(credentials.password.as_str())
                .workgroup(credentials.domain.as_str()),
            SmbOptions::default()
                .one_share_per_server(true)
                .case_sensitive(false),
        )
        .map_err(|e| Error::Session(e.to_string()))?;
        let session = Self { client };
        session.check_connection()?;
        Ok(session)
    }

    fn check_connection(&self) -> Result<(), Error> {
        trace!("checking connection...");
        match self.client.get_user() {
            Err(e) => {
                error!("connection ERROR: {}", e);
                Err(Error::Session(e.to_string()))
            }
            Ok(_) => {
                trace!("connection OK");
                Ok(())
            }
        }
    }
}

impl SmbSession for NativeSession {
    fn list_shares(&mut self) -> Result<Vec<ShareEntry>, Error> {
        trace!("listing shares at server root");
        let dirents = self
            .client
            .list_dir("/")
            .map_err(|e| Error::Session(e.to_string()))?;
        Ok(dirents
            .into_iter()
            .map(|d| ShareEntry {
                name: d.name().to_string(),
                remark: d.comment().to_string(),
            })
            .collect())
    }

    fn list_root(&mut self, share: &str) -> Result<(), Error> {
        let uri = format!("/{}/", share);
        trace!("read probe at {}", uri);
        self.client
            .list_dir(uri.as_str())
            .map(|_| ())
            .map_err(|e| Error::Session(e.to_string()))
    }

    fn create_dir(&mut self, share: &str, path: &str) -> Result<(), Error> {
        let uri = format!("/{}/{}", share, path);
        trace!("making directory at {}", uri);
        self.client
            .mkdir(uri, SmbMode::from(0o755 as mode_t))
            .map_err(|e| Error::Session(e.to_string()))
    }

    fn remove_dir(&mut self, share: &str, path: &str) -> Result<(), Error> {
        let uri = format!("/{}/{}", share, path);
        trace!("removing directory at {}", uri);
        self.client
            .rmdir(uri)
            .map_err(|e| Error::Session(e.to_string()))
    }
}
