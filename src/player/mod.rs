//! Cut-aware player plumbing
//!
//! Connects a playback backend to the time-domain engine:
//!
//! - `backend`: `PlaybackBackend` trait and a clock-driven `SimulatedBackend`
//! - `tracker`: Active point-of-interest tracking from periodic time reports
//! - `session`: `PlayerSession` (duration sync, seeking, snapshots)
//! - `render/`: Progress line and highlight output
//!
//! # Usage
//!
//! ```
//! use cutline::descriptor::{CutEdge, MediaDescriptor};
//! use cutline::player::{HighlightTracker, PlayerSession, SimulatedBackend};
//! use cutline::timeline::TimeDomainEngine;
//!
//! let media = MediaDescriptor {
//!     cut: vec![CutEdge::begin(1200.0), CutEdge::end(2400.0)],
//!     ..Default::default()
//! };
//! let mut session = PlayerSession::new(
//!     TimeDomainEngine::with_media(media),
//!     SimulatedBackend::new(6000.0),
//!     HighlightTracker::all(),
//! );
//! session.start();
//! let (snapshot, _changes) = session.tick();
//! assert_eq!(snapshot.duration, 1200.0);
//! ```

pub mod backend;
pub mod render;
pub mod session;
pub mod tracker;

pub use backend::{PlaybackBackend, SimulatedBackend};
pub use session::{PlaybackSnapshot, PlayerSession};
pub use tracker::{HighlightChange, HighlightTracker};
