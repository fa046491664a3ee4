//! Domain layer - pure negotiation logic with no I/O.

pub mod negotiation;
