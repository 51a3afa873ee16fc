mod coerced;
mod status;
mod tool_paths;

#[rustfmt::skip]
pub use {
    coerced::*,
    status::*,
    tool_paths::*,
};
