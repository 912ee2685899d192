//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use case of the application: pricing a vehicle.

mod pricing;

pub use pricing::PricingService;
