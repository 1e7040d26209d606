//! ## shares
//!
//! share enumeration and access probing

use crate::errors::Error;
use crate::session::{ShareEntry, SmbSession};

/// Outcome of a single access probe.
///
/// `Denied` and `Failed` both classify as "no access" in the report; the
/// distinction only matters for diagnostics. Probes are heuristics, not ACL
/// queries, so false negatives are possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probe operation succeeded.
    Granted,
    /// The server refused the operation.
    Denied,
    /// The probe failed for a reason other than access rights.
    Failed(String),
}

impl ProbeOutcome {
    pub fn granted(&self) -> bool {
        matches!(self, ProbeOutcome::Granted)
    }

    fn from_result(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => ProbeOutcome::Granted,
            Err(e) => {
                let reason = e.to_string();
                if reason.to_lowercase().contains("denied") {
                    ProbeOutcome::Denied
                } else {
                    ProbeOutcome::Failed(reason)
                }
            }
        }
    }
}

/// A share together with its probed access rights.
/// One record per advertised share, in server enumeration order.
#[derive(Debug, Clone)]
pub struct Share {
    pub name: String,
    pub remark: String,
    pub read: ProbeOutcome,
    pub write: ProbeOutcome,
}

impl Share {
    pub fn readable(&self) -> bool {
        self.read.granted()
    }

    pub fn writable(&self) -> bool {
        self.write.granted()
    }

    /// Comma-joined access flags, e.g. `READ,WRITE`.
    pub fn permissions(&self) -> String {
        let mut flags = Vec::new();
        if self.readable() {
            flags.push("READ");
        }
        if self.writable() {
            flags.push("WRITE");
        }
        flags.join(",")
    }
}

/// Enumerate every share advertised by the session and probe each one for
/// read and write access, in server order. Probe errors are captured into
/// the outcome and never propagated; failing to list the shares themselves
/// is fatal.
pub fn enumerate(session: &mut dyn SmbSession) -> Result<Vec<Share>, Error> {
    let probe_dir = format!(".rwprobe_{}", std::process::id());
    let mut shares = Vec::new();
    for ShareEntry { name, remark } in session.list_shares()? {
        let name = strip_nul(&name).to_string();
        let remark = strip_nul(&remark).to_string();

        let read = ProbeOutcome::from_result(session.list_root(&name));
        if !read.granted() {
            debug!("read probe on {}: {:?}", name, read);
        }

        // WRITE only when both halves succeed; a failed delete leaves the
        // probe directory behind on the share
        let write = match session.create_dir(&name, &probe_dir) {
            Ok(()) => ProbeOutcome::from_result(session.remove_dir(&name, &probe_dir)),
            Err(e) => ProbeOutcome::from_result(Err(e)),
        };
        if !write.granted() {
            debug!("write probe on {}: {:?}", name, write);
        }

        shares.push(Share {
            name,
            remark,
            read,
            write,
        });
    }
    Ok(shares)
}

/// Strip the trailing NUL terminator some servers include in the advertised
/// name and remark fields.
fn strip_nul(s: &str) -> &str {
    s.trim_end_matches('\0')
}
