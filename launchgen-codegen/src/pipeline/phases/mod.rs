//! Built-in pipeline phases.
//!
//! - [`DetectPhase`] - picks the runtime from marker files
//! - [`LoadPhase`] - best-effort loading of the three JSON inputs
//! - [`FilterPhase`] - drops generated entries from the previous run
//! - [`DiscoverPhase`] - one entry per test/run file in each workspace scope
//! - [`AugmentPhase`] - one entry per custom group script

mod augment;
mod detect;
mod discover;
mod filter;
mod load;

pub use augment::AugmentPhase;
pub use detect::DetectPhase;
pub use discover::DiscoverPhase;
pub use filter::FilterPhase;
pub use load::LoadPhase;
