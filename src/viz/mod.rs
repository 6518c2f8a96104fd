//! Shared machinery for the staged visualization widgets: the stage
//! sequencer, route/segment model, moving-marker animator, view geometry,
//! drawing surface and cosmetic randomness.

pub mod geo;
pub mod marker;
pub mod rng;
pub mod route;
pub mod sequencer;
pub mod surface;

pub use geo::{Bounds, FitAnim, LatLng, Point, ViewTransform};
pub use marker::{Marker, tick_markers};
pub use rng::VizRng;
pub use route::{EdgeSet, Segment, decompose, rejoin};
pub use sequencer::{SeqEvent, Sequencer};
pub use surface::{CanvasSurface, Surface};
