//! Running scheduler tools, locally or on a login node over ssh.

mod runner;
mod ssh_proxy;

#[rustfmt::skip]
pub use {
    runner::ProcessCommandRunner,
    ssh_proxy::{SshProxy, SshProxyConfig},
};
