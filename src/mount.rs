//! ## mount
//!
//! mounts readable shares under a local directory named after the target
//! host, or unmounts them again

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::report::Reporter;
use crate::session::ServerIdentity;
use crate::shares::Share;

/// Everything the mount step needs, passed explicitly.
///
/// Username and password end up on the `mount` command line (mount.cifs
/// option syntax), so they are visible in local process listings for the
/// duration of the call.
pub struct MountContext<'a> {
    pub identity: &'a ServerIdentity,
    pub username: &'a str,
    pub password: &'a str,
    pub writable: bool,
}

impl MountContext<'_> {
    /// Local directory the share is mounted at: `<hostname>/<share>`.
    pub fn host_dir(&self, share: &Share) -> PathBuf {
        PathBuf::from(&self.identity.hostname).join(&share.name)
    }

    /// Mount source `//<ip>/<share>`: always the resolved address, so the
    /// mount does not depend on the target name resolving locally.
    fn source(&self, share: &Share) -> String {
        format!("//{}/{}", self.identity.ip, share.name)
    }
}

/// Mount one readable share. Failures are reported for this share only; the
/// remaining shares proceed.
pub fn mount_share(context: &MountContext, share: &Share, reporter: &Reporter) {
    let dir = context.host_dir(share);
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(&dir) {
            reporter.failure(&format!("Unable to create {}: {}", dir.display(), e));
            return;
        }
    }
    match dir_is_empty(&dir) {
        Ok(true) => {}
        Ok(false) => {
            // never mount over existing content
            reporter.failure(&format!(
                "{} is not an empty directory. Unable to mount",
                dir.display()
            ));
            return;
        }
        Err(e) => {
            reporter.failure(&format!("Unable to inspect {}: {}", dir.display(), e));
            return;
        }
    }

    if context.writable {
        reporter.warn("Caution you mounted these shares as WRITABLE");
    }
    let source = context.source(share);
    let args = mount_args(
        &source,
        &dir,
        context.username,
        context.password,
        context.writable,
    );
    debug!("mounting {} at {}", source, dir.display());
    match run("mount", &args) {
        Ok(true) => reporter.success(&format!("Mounted {} Successfully!", dir.display())),
        Ok(false) => reporter.failure(&format!("Unable to mount share: //{}", dir.display())),
        Err(e) => {
            debug!("mount invocation failed: {}", e);
            reporter.failure(&format!("Unable to mount share: //{}", dir.display()));
        }
    }
}

/// Unmount one share and remove its now-empty directory. A directory that
/// was never mounted is reported and left untouched.
pub fn unmount_share(context: &MountContext, share: &Share, reporter: &Reporter) {
    let dir = context.host_dir(share);
    if !dir.exists() {
        reporter.failure(&format!(
            "Can't unmount {} because it doesn't exist",
            dir.display()
        ));
        return;
    }
    debug!("unmounting {}", dir.display());
    match run("umount", &[dir.display().to_string()]) {
        Ok(true) => {
            reporter.success(&format!("Unmounted: {}", dir.display()));
            match fs::remove_dir(&dir) {
                Ok(()) => reporter.success(&format!("Removed: {}", dir.display())),
                Err(e) => {
                    reporter.failure(&format!("Unable to remove {}: {}", dir.display(), e))
                }
            }
        }
        Ok(false) => {
            reporter.failure(&format!("Unable to unmount share: {}", dir.display()));
        }
        Err(e) => {
            debug!("umount invocation failed: {}", e);
            reporter.failure(&format!("Unable to unmount share: {}", dir.display()));
        }
    }
}

/// Argument vector for the `mount` invocation of one share. Read-only unless
/// `writable`.
fn mount_args(
    source: &str,
    target: &Path,
    username: &str,
    password: &str,
    writable: bool,
) -> Vec<String> {
    let mut args = Vec::new();
    if !writable {
        args.push("-r".to_string());
    }
    args.extend([
        "-t".to_string(),
        "cifs".to_string(),
        source.to_string(),
        format!("./{}", target.display()),
        "-o".to_string(),
        format!("username={},password={}", username, password),
    ]);
    args
}

fn run(command: &str, args: &[String]) -> io::Result<bool> {
    let status = Command::new(command)
        .args(args)
        .stdout(Stdio::null())
        .status()?;
    Ok(status.success())
}

fn dir_is_empty(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}
