#![allow(missing_docs)]
pub mod pinch_context;
pub mod shared_pinch_context;

pub use pinch_context::{HandSlot, PinchContext, PinchDiagnostics};
pub use shared_pinch_context::SharedPinchContext;
