//! 2D rendering for Galaxy Explorer: the drawing surface trait, a CPU shape batch that
//! implements it, and a wgpu renderer that presents the batch.

pub mod batch;
pub mod font;
pub mod pipeline;
pub mod renderer;
pub mod surface;
pub mod vertex;

pub use batch::*;
pub use pipeline::*;
pub use renderer::*;
pub use surface::*;
pub use vertex::*;
