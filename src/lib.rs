// SPDX-License-Identifier: MPL-2.0

//! Recycle Camera - capture core for a recycling-identification application
//!
//! This library provides the capture lifecycle for the recycling camera:
//! acquiring a live camera session, capturing a still on an external shutter
//! signal, submitting the still to a remote classification service, and
//! deriving what to render at every step.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Capture page state machine and render plan
//! - [`backends`]: Camera backend abstraction and scoped sessions
//! - [`classify`]: Classification query client and wire types
//! - [`card`]: Stateless category grid card
//! - [`config`]: User configuration handling

pub mod app;
pub mod backends;
pub mod card;
pub mod classify;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types
pub use app::{CapturePage, CaptureState, Message, RenderPlan};
pub use card::CategoryCard;
pub use classify::{Cluster, Material, QueryState};
pub use config::CaptureConfig;
