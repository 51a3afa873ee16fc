mod command_runner;
mod snapshot;

#[rustfmt::skip]
pub use {
    command_runner::*,
    snapshot::*,
};
