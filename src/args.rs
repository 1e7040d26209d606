//! ## args
//!
//! command line surface

use std::path::PathBuf;

use argh::FromArgs;

pub const BANNER: &str = r"
    x-------------x
    | sharemount  |
    x-------------x
";

#[derive(FromArgs, Debug)]
#[argh(description = "list SMB shares on a target host and mount the readable ones locally

where target is [[domain/]username[:password]@]<host name or address>")]
pub struct Args {
    #[argh(
        switch,
        description = "show all shares, not only the readable ones; disables mount/unmount"
    )]
    pub show: bool,
    #[argh(switch, short = 'm', description = "mount readable shares locally")]
    pub mount: bool,
    #[argh(
        switch,
        short = 'u',
        description = "unmount shares for the target and remove their directories"
    )]
    pub unmount: bool,
    #[argh(
        switch,
        description = "mount shares as writable (default is read-only)"
    )]
    pub write: bool,
    #[argh(switch, description = "turn debug output on")]
    pub debug: bool,
    #[argh(
        option,
        short = 'A',
        arg_name = "authfile",
        description = "smbclient/mount.cifs-style authentication file; overrides credentials in target"
    )]
    pub auth_file: Option<PathBuf>,
    #[argh(
        option,
        short = 'p',
        default = "445",
        description = "destination port to connect to the SMB server (139 or 445)"
    )]
    pub port: u16,
    #[argh(
        positional,
        description = "[[domain/]username[:password]@]<host name or address>"
    )]
    pub target: String,
}

impl Args {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mount && self.unmount {
            anyhow::bail!("-m/--mount and -u/--unmount are mutually exclusive");
        }
        if self.port != 445 && self.port != 139 {
            anyhow::bail!("invalid SMB port {}; must be 139 or 445", self.port);
        }
        Ok(())
    }
}
