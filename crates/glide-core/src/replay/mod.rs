//! Headless scripted runs of the showcase page

pub mod runner;
pub mod script;

pub use runner::{replay, CarouselFrame, Replay, ReplayFrame, SectionFrame};
pub use script::{CarouselLayout, Script, Step};
