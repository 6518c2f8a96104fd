mod component;
pub mod data;
mod render;
pub mod state;

pub use component::NlpViz;
