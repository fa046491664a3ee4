//! Penny Backend - voice negotiation demo service
//!
//! This crate implements the server side of a voice-driven price negotiation
//! demo: a scripted pawn shop persona haggles with the user over an item,
//! with per-session conversation history and speech synthesis for replies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
