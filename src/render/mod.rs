//! Frame-scoped rendering primitives shared by both engines.

mod canvas;
mod depth;
mod framebuffer;
mod interpolate;

pub use canvas::Canvas;
pub use depth::{DepthBuffer, UNWRITTEN};
pub use framebuffer::{FrameBuffer, CHANNELS};
pub use interpolate::{edge_interpolate, interpolate, Stepper};
