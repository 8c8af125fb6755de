#![allow(missing_docs)]
pub mod pinch_pointers;

pub use pinch_pointers::pinch_pointers_system;
