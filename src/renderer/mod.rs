//! Rendering module
//!
//! Retained-mode drawing surfaces in logical coordinates, plus tessellation
//! of shapes into GPU-ready vertices.

pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use scene::{DrawnShape, HeadlessWindows, Scene, ScriptEvent};
pub use surface::{InputEvent, Shape, ShapeId, Style, Surface, WindowSpec, WindowSystem};
pub use vertex::{Vertex, colors};
