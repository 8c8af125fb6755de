#![deny(missing_docs)]

//! Turns a noisy stream of spatial interaction events into two tracked hands.
//!
//! Headsets deliver pinches from eye gaze, hand tracking, assistive pointers and accessibility
//! inputs as a flat, unordered collection of events. Each event has an opaque id but no notion of
//! which hand it belongs to. [`PinchContext`] sorts them into at most one `left` and one `right`
//! pinch, each with a selection ray and a device pose, and recovers on its own when the stream
//! claims there are more than two hands.
//!
//! # Getting started
//! Create one [`PinchContext`] when your session starts and feed it every event your gesture
//! callback receives:
//!
//! ```
//! use pinch_tracker::{
//!     interaction::{InteractionEvent, InteractionId, InteractionKind, InteractionPhase},
//!     PinchContext,
//! };
//!
//! let mut pinch_context = PinchContext::default();
//! let event = InteractionEvent::new(
//!     InteractionId(1),
//!     InteractionKind::IndirectPinch,
//!     InteractionPhase::Active,
//! );
//! pinch_context.process_event(&event);
//! assert!(pinch_context.left().is_pinching());
//! ```
//!
//! Then read [`PinchContext::left`] and [`PinchContext::right`] each frame, or let
//! [`systems::pinch_pointers_system`] copy them onto your entities.

pub use contexts::{PinchContext, SharedPinchContext};
pub use glam;
pub use hecs;
pub use pinch_error::PinchError;

/// Components are data that are used to update the simulation and interact with the external world
pub mod components;
/// Contexts hold the tracker state that outlives a single event
pub mod contexts;
/// Incoming interaction events and the pieces needed to interpret them
pub mod interaction;
mod pinch_error;
/// Reading and writing recorded event streams
pub mod recording;
/// Systems are functions called each frame to update the simulation from tracker state
pub mod systems;

/// pinch-tracker result type
pub type PinchResult<T> = std::result::Result<T, PinchError>;
