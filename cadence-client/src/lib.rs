//! Backend client interfaces for the Cadence frontend.
//!
//! The frontend never talks to the history or matching services directly;
//! it goes through these traits, which are bound late (after the frontend
//! itself is constructed) via a [`ClientFactory`].

pub mod factory;
pub mod history;
pub mod matching;

pub use factory::*;
pub use history::*;
pub use matching::*;
