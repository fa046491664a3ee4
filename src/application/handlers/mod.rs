//! Use case handlers, one per operation.

pub mod negotiation;
pub mod speech;
