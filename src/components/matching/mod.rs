mod component;
pub mod data;
mod render;
pub mod state;
pub mod types;

pub use component::MatchingViz;
