//! Time-domain engine
//!
//! Maps between the real time domain of a media asset and the cut time
//! domain of its virtually trimmed version, and filters points of interest
//! into the cut domain.
//!
//! # Module Structure
//!
//! - [`cut`] - Cut model: edges, activation, validation against the duration
//! - `convert` - Real/cut time and percentage conversions (methods on `CutState`)
//! - [`poi`] - Point-of-interest filtering and lookup
//! - [`events`] - Typed engine notifications and subscriber list
//! - [`engine`] - `TimeDomainEngine` façade

pub mod cut;
mod convert;
pub mod engine;
pub mod events;
pub mod poi;

pub use cut::{CutState, CutWindow, DiscardReason};
pub use engine::{describe_discard, TimeDomainEngine};
pub use events::{EngineEvent, Subscribers, SubscriptionId};
pub use poi::MarkerKey;
