//! Services layer (ports + adapters).
//!
//! - `ports`: plain contracts/types used across the app (kernel-facing).
//! - `adapters`: OS specific implementations (IO, processes).

pub mod adapters;
pub mod ports;
