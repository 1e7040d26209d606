//! ## report
//!
//! human-facing share report

use colored::Colorize;

use crate::creds::Credentials;
use crate::session::ServerIdentity;
use crate::shares::Share;

/// Renders the enumeration report.
///
/// Every line carries a `SMB <ip> <port> <hostname>` prefix so output from
/// different targets can be told apart when collected together. Plain text,
/// no machine-readable structure.
pub struct Reporter {
    prefix: String,
    hostname: String,
}

impl Reporter {
    pub fn new(identity: &ServerIdentity) -> Self {
        Self {
            prefix: format!(
                "{}\t{}\t{}\t{}",
                "SMB".bright_blue(),
                identity.ip,
                identity.port,
                identity.hostname
            ),
            hostname: identity.hostname.clone(),
        }
    }

    fn line(&self, body: &str) {
        println!("{}{}", self.prefix, body);
    }

    /// `[+]` tagged status line.
    pub fn success(&self, message: &str) {
        self.line(&format!("\t{} {}", "[+]".bright_green(), message));
    }

    /// `[*]` tagged informational line.
    pub fn info(&self, message: &str) {
        self.line(&format!("\t{} {}", "[*]".bright_blue(), message));
    }

    /// `[-]` tagged per-share error line. Never aborts anything.
    pub fn failure(&self, message: &str) {
        self.line(&format!("\t{} {}", "[-]".red(), message));
    }

    pub fn warn(&self, message: &str) {
        self.line(&format!("\t{} {}", "[!]".red(), message.red()));
    }

    /// Identity line printed once the session is up, in `who/user:password`
    /// form. The password is shown in the clear, like the mount command line
    /// will carry it anyway.
    pub fn identity(&self, credentials: &Credentials) {
        let who = if credentials.domain.is_empty() {
            &self.hostname
        } else {
            &credentials.domain
        };
        self.success(&format!(
            "{}/{}:{}",
            who, credentials.username, credentials.password
        ));
    }

    pub fn table_header(&self, all: bool) {
        if all {
            self.success("Enumerated all shares");
        } else {
            self.success("Enumerated readable shares");
        }
        self.line(&format!(
            "\t{}",
            format!("{:<15} {:<15} {}", "Share", "Permissions", "Remark").yellow()
        ));
        self.line(&format!(
            "\t{}",
            format!("{:<15} {:<15} {}", "-----", "-----------", "------").yellow()
        ));
    }

    pub fn share_row(&self, share: &Share) {
        self.line(&format!("\t{}", format_row(share).yellow()));
    }
}

/// Fixed-width report row: name, comma-joined access flags, remark.
pub fn format_row(share: &Share) -> String {
    format!(
        "{:<15} {:<15} {}",
        share.name,
        share.permissions(),
        share.remark
    )
}

/// Shares shown in the default report: classified READ, minus any share
/// whose rendered row contains "IPC". The administrative IPC$ share is never
/// surfaced for mounting.
pub fn visible_shares(shares: &[Share]) -> Vec<&Share> {
    shares
        .iter()
        .filter(|s| s.readable() && !format_row(s).contains("IPC"))
        .collect()
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::shares::ProbeOutcome;

    fn share(name: &str, remark: &str, read: bool, write: bool) -> Share {
        let outcome = |granted| {
            if granted {
                ProbeOutcome::Granted
            } else {
                ProbeOutcome::Denied
            }
        };
        Share {
            name: name.to_string(),
            remark: remark.to_string(),
            read: outcome(read),
            write: outcome(write),
        }
    }

    #[test]
    fn should_format_fixed_width_row() {
        assert_eq!(
            format_row(&share("PUBLIC", "Public stuff", true, true)),
            "PUBLIC          READ,WRITE      Public stuff"
        );
    }

    #[test]
    fn should_format_row_without_access_flags() {
        assert_eq!(
            format_row(&share("ADMIN$", "Remote Admin", false, false)),
            "ADMIN$                          Remote Admin"
        );
    }

    #[test]
    fn should_filter_unreadable_shares() {
        let shares = vec![
            share("PUBLIC", "", true, false),
            share("SECRET", "", false, true),
        ];
        let visible = visible_shares(&shares);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "PUBLIC");
    }

    #[test]
    fn should_skip_ipc_shares_even_when_readable() {
        let shares = vec![
            share("PUBLIC", "", true, false),
            share("IPC$", "Remote IPC", true, true),
        ];
        let visible = visible_shares(&shares);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "PUBLIC");
    }

    #[test]
    fn should_skip_shares_with_ipc_in_the_remark() {
        let shares = vec![share("PIPES", "IPC endpoints", true, false)];
        assert!(visible_shares(&shares).is_empty());
    }

    #[test]
    fn should_keep_server_order_in_the_filtered_report() {
        let shares = vec![
            share("ZETA", "", true, false),
            share("ALPHA", "", true, false),
        ];
        let names: Vec<&str> = visible_shares(&shares)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["ZETA", "ALPHA"]);
    }
}
