mod app;
mod gpu;
mod surface;

pub use app::{run, SimOptions};
pub use gpu::GpuContext;
pub use surface::SurfaceRenderer;
