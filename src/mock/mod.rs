//! ## Mock
//!
//! Contains mock for test units

use std::collections::HashMap;

use crate::errors::Error;
use crate::session::{ShareEntry, SmbSession};

// -- logger

#[allow(dead_code)]
pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- session

/// Scripted `SmbSession`: advertises a fixed share list and fails the probes
/// it was told to fail. Records the directories the write probe touched.
#[derive(Default)]
pub struct MockSession {
    entries: Vec<ShareEntry>,
    listing_error: Option<String>,
    read_errors: HashMap<String, String>,
    create_errors: HashMap<String, String>,
    remove_errors: HashMap<String, String>,
    pub created: Vec<String>,
    pub removed: Vec<String>,
}

impl MockSession {
    pub fn new(entries: Vec<(&str, &str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, remark)| ShareEntry {
                    name: name.to_string(),
                    remark: remark.to_string(),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn fail_listing(mut self, reason: &str) -> Self {
        self.listing_error = Some(reason.to_string());
        self
    }

    pub fn deny_read(mut self, share: &str) -> Self {
        self.read_errors
            .insert(share.to_string(), "permission denied".to_string());
        self
    }

    pub fn fail_read(mut self, share: &str, reason: &str) -> Self {
        self.read_errors
            .insert(share.to_string(), reason.to_string());
        self
    }

    pub fn deny_write(mut self, share: &str) -> Self {
        self.create_errors
            .insert(share.to_string(), "permission denied".to_string());
        self
    }

    pub fn fail_remove(mut self, share: &str, reason: &str) -> Self {
        self.remove_errors
            .insert(share.to_string(), reason.to_string());
        self
    }
}

impl SmbSession for MockSession {
    fn list_shares(&mut self) -> Result<Vec<ShareEntry>, Error> {
        match &self.listing_error {
            Some(reason) => Err(Error::Session(reason.clone())),
            None => Ok(self.entries.clone()),
        }
    }

    fn list_root(&mut self, share: &str) -> Result<(), Error> {
        match self.read_errors.get(share) {
            Some(reason) => Err(Error::Session(reason.clone())),
            None => Ok(()),
        }
    }

    fn create_dir(&mut self, share: &str, path: &str) -> Result<(), Error> {
        match self.create_errors.get(share) {
            Some(reason) => Err(Error::Session(reason.clone())),
            None => {
                self.created.push(format!("{}/{}", share, path));
                Ok(())
            }
        }
    }

    fn remove_dir(&mut self, share: &str, path: &str) -> Result<(), Error> {
        match self.remove_errors.get(share) {
            Some(reason) => Err(Error::Session(reason.clone())),
            None => {
                self.removed.push(format!("{}/{}", share, path));
                Ok(())
            }
        }
    }
}
