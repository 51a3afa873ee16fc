mod job;
mod node;
mod snapshot;
mod storage;

#[rustfmt::skip]
pub use {
    job::*,
    node::*,
    snapshot::*,
    storage::*,
};
