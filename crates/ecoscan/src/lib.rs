//! Carbon footprint scoring and eco-reward matching for scanned clothing.

pub mod api;
pub mod config;
pub mod error;
pub mod footprint;
pub mod offers;
pub mod recognition;
pub mod telemetry;
