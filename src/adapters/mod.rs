//! Adapters - implementations of ports against concrete infrastructure.

pub mod ai;
pub mod http;
pub mod session;
pub mod speech;
