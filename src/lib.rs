//! Cutline - media time-domain remapping and points-of-interest engine
//!
//! A media asset can be virtually trimmed by a cut with a begin and an end
//! edge. Cutline presents every consumer (seek bars, buffered-range
//! indicators, slide, chapter and tag lists) with one consistent cut time
//! domain derived from the asset's real time domain, and re-anchors points
//! of interest into it.
//!
//! - [`descriptor`] - Media descriptor types and loading
//! - [`timeline`] - The time-domain engine (cut model, conversions, POI filter)
//! - [`player`] - Backend abstraction, highlight tracking and progress rendering
//! - [`config`] - User configuration
//! - [`cli`] - Command-line definitions

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod player;
pub mod timeline;

pub use config::Config;
pub use descriptor::{MediaDescriptor, Poi, PoiKind, PointOfInterest};
pub use timeline::{EngineEvent, TimeDomainEngine};
