//! # API Route Modules
//!
//! Each module defines an Axum router for one surface area. Routers are
//! assembled into the application in [`crate::app`].

pub mod cars;
