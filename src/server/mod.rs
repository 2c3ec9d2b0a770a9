//! TCP accept loop and per-connection dispatch.

pub mod listener;
