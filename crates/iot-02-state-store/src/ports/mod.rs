//! # Ports Layer
//!
//! - **Outbound (Driven)**: the key-value store the host runtime provides

pub mod outbound;
