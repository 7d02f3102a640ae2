pub mod gpu_context;
pub mod sprite_pipeline;
pub mod sprite_renderer;
pub mod texture;
pub mod vertex;
pub mod viewport;

pub use gpu_context::GpuContext;
pub use sprite_pipeline::SpritePipeline;
pub use sprite_renderer::SpriteRenderer;
pub use texture::Texture;
pub use vertex::SpriteVertex;
pub use viewport::{ProjectionUniform, Viewport};
