//! # sharemount
//!
//! Lists the SMB shares a target host advertises to a given user, probes
//! each one for read and write access, and optionally mounts the readable
//! ones under `<hostname>/<share>` so they can be searched with local tools.

#[macro_use]
extern crate log;

mod args;
mod creds;
mod errors;
mod mount;
mod report;
mod session;
mod shares;

// -- mock
#[cfg(test)]
pub(crate) mod mock;

use std::process::exit;

use argh::FromArgs;

use args::Args;
use mount::MountContext;
use report::Reporter;
use session::{NativeSession, ServerIdentity};

fn main() {
    let args = parse_args();
    init_logger(args.debug);
    if let Err(e) = args.validate() {
        error!("{}", e);
        exit(1);
    }
    if let Err(e) = run(&args) {
        error!("{:#}", e);
        debug!("{:?}", e);
        exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut credentials = creds::resolve(&args.target, args.auth_file.as_deref())?;
    if credentials.password.is_empty() && !credentials.username.is_empty() {
        credentials.password = read_secret_from_tty("Password: ")?;
    }

    let identity = ServerIdentity::resolve(&credentials.host, args.port)?;
    let mut session = NativeSession::connect(&identity, &credentials)?;

    let reporter = Reporter::new(&identity);
    reporter.info(&format!(
        "session established on port {}",
        identity.port
    ));
    reporter.identity(&credentials);

    let all = shares::enumerate(&mut session)?;
    reporter.table_header(args.show);

    if args.show {
        // show everything, never mount/unmount
        for share in &all {
            reporter.share_row(share);
        }
        return Ok(());
    }

    let context = MountContext {
        identity: &identity,
        username: &credentials.username,
        password: &credentials.password,
        writable: args.write,
    };
    for share in report::visible_shares(&all) {
        reporter.share_row(share);
        if args.mount {
            mount::mount_share(&context, share, &reporter);
        } else if args.unmount {
            mount::unmount_share(&context, share, &reporter);
        }
    }

    Ok(())
}

/// Print the banner and the full usage, then exit 1, when invoked with no
/// arguments at all.
fn parse_args() -> Args {
    if std::env::args().len() <= 1 {
        println!("{}", args::BANNER);
        if let Err(early_exit) = Args::from_args(&["sharemount"], &["--help"]) {
            println!("{}", early_exit.output);
        }
        exit(1);
    }
    argh::from_env()
}

fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::builder().filter_level(level).try_init();
}

/// Read a secret from tty with customisable prompt
fn read_secret_from_tty(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}
