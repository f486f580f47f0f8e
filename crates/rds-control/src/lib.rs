//! Stopkeeper RDS Control Crate
//!
//! This crate provides the narrow, mockable surface between the stop engine
//! and the RDS/Aurora control plane.
//!
//! # Overview
//!
//! The crate contains:
//! - The resource vocabulary: cluster vs instance, and how each maps onto
//!   stop operations and identifier parameters
//! - The [`RdsControl`] collaborator trait that concrete SDK clients and
//!   test fakes implement
//! - The structured [`RdsApiError`] that carries provider faults to the
//!   classification engine
//!
//! Nothing in here talks to the network; wiring a real SDK client is a host
//! concern.
//!
//! # Core Types
//!
//! - [`ResourceType`] - Kind of resource a notification refers to
//! - [`StopRequest`] - One stop call with its wire parameters
//! - [`DbInstanceSummary`] - Slim view of a described instance
//! - [`RdsControl`] - Control-plane collaborator trait
//! - [`RdsApiError`] - Structured provider fault or transport failure

pub mod client;
pub mod errors;
pub mod model;

// Re-export the public surface
pub use client::RdsControl;
pub use errors::{RdsApiError, UnknownSourceType};
pub use model::{DbInstanceSummary, ResourceType, StopRequest};
