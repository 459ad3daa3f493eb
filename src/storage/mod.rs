//! Storage layer for the analysis core
//!
//! Holds the flat-file persistence of the cumulative unrecognized-word
//! list used for dictionary curation.

pub mod unrecognized;

pub use unrecognized::UnrecognizedWordStore;
