//! Core types and session logic for the skiphire skip rental browser.

/// Filter criteria and the filtering predicate.
pub mod filter;
/// Skip options and the immutable catalog.
pub mod model;
/// Traits describing catalog sources and the confirm hook.
pub mod ports;
/// VAT-inclusive pricing.
pub mod pricing;
/// The at-most-one selection state machine.
pub mod selection;
/// Browsing session facade used by clients.
pub mod service;
/// Booking flow steps and the confirmation notification.
pub mod workflow;

pub use filter::*;
pub use model::*;
pub use ports::*;
pub use pricing::*;
pub use selection::*;
pub use service::*;
pub use workflow::*;
