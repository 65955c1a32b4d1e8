//! RunFlash Platform
//!
//! Read/write API layer for the flash-sales marketing site:
//! - Validated record shapes for subscribers, brands, sale events,
//!   sale products and reservations
//! - A document store accessor over MongoDB
//! - Public HTTP routes for the landing page (events, products, subscribe)

pub mod domain;
pub mod repository;
pub mod api;
pub mod error;

pub use domain::*;
pub use error::PlatformError;
