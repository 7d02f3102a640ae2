//! Per-frame drawing of the single sprite quad.
//!
//! One frame is: acquire surface texture, clear to mid-grey, restrict the
//! draw area to the letterboxed viewport rect, draw the sprite quad with the
//! pixel-space projection, submit, present. The quad is rebuilt on the CPU
//! every frame and streamed with `write_buffer`; the sprite texture is
//! uploaded once up front and only bound afterwards.

use glam::Vec2;
use wgpu::util::DeviceExt;

use crate::gpu_context::GpuContext;
use crate::sprite_pipeline::SpritePipeline;
use crate::texture::Texture;
use crate::vertex::SpriteVertex;
use crate::viewport::{ProjectionUniform, Viewport};

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

struct GpuSprite {
    #[allow(dead_code)]
    texture: Texture,
    bind_group: wgpu::BindGroup,
}

pub struct SpriteRenderer {
    pipeline: SpritePipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    projection_buffer: wgpu::Buffer,
    projection_bind_group: wgpu::BindGroup,
    sprite: Option<GpuSprite>,
}

impl SpriteRenderer {
    pub fn new(gpu: &GpuContext) -> Self {
        let pipeline = SpritePipeline::new(&gpu.device, gpu.surface_format);

        let vertex_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Vertex Buffer"),
            size: (4 * std::mem::size_of::<SpriteVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sprite Index Buffer"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });
        let projection_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Projection Uniform Buffer"),
            size: std::mem::size_of::<ProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let projection_bind_group =
            pipeline.create_projection_bind_group(&gpu.device, &projection_buffer);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            projection_buffer,
            projection_bind_group,
            sprite: None,
        }
    }

    /// Upload the sprite pixels once. Rendering afterwards only binds the
    /// resulting texture; call again if the pixels ever change.
    pub fn upload_sprite(&mut self, gpu: &GpuContext, pixels: &[u8], width: u32, height: u32) {
        let texture =
            Texture::from_rgba8(&gpu.device, &gpu.queue, pixels, width, height, "player_sprite");
        let bind_group = self.pipeline.create_texture_bind_group(&gpu.device, &texture);
        self.sprite = Some(GpuSprite {
            texture,
            bind_group,
        });
    }

    /// Draw one frame: the sprite at `position` (origin at the center of the
    /// logical screen), scaled to `target_width` x `target_height` pixels.
    pub fn render(
        &mut self,
        gpu: &GpuContext,
        viewport: &Viewport,
        position: Vec2,
        target_width: f32,
        target_height: f32,
    ) {
        let min = Vec2::new(
            viewport.width as f32 * 0.5 - target_width * 0.5,
            viewport.height as f32 * 0.5 - target_height * 0.5,
        ) + position;
        let max = min + Vec2::new(target_width, target_height);
        // UV origin is the top-left of the source image: v=1 along the
        // bottom edge of the quad.
        let vertices = [
            SpriteVertex {
                position: [min.x, min.y],
                tex_coords: [0.0, 1.0],
            },
            SpriteVertex {
                position: [max.x, min.y],
                tex_coords: [1.0, 1.0],
            },
            SpriteVertex {
                position: [max.x, max.y],
                tex_coords: [1.0, 0.0],
            },
            SpriteVertex {
                position: [min.x, max.y],
                tex_coords: [0.0, 0.0],
            },
        ];
        gpu.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        gpu.queue.write_buffer(
            &self.projection_buffer,
            0,
            bytemuck::cast_slice(&[viewport.build_uniform()]),
        );

        let Some((output, view)) = gpu.begin_frame() else {
            return;
        };

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            if let Some((x, y, w, h)) = letterbox_rect(viewport, gpu.size) {
                render_pass.set_viewport(x, y, w, h, 0.0, 1.0);
            }

            if let Some(sprite) = &self.sprite {
                render_pass.set_pipeline(&self.pipeline.render_pipeline);
                render_pass.set_bind_group(0, &self.projection_bind_group, &[]);
                render_pass.set_bind_group(1, &sprite.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

/// Intersect the letterbox rect with the surface bounds. wgpu rejects
/// viewports extending outside the framebuffer (GL clipped them silently),
/// so the stored offsets stay as computed and the clamp happens only here.
fn letterbox_rect(viewport: &Viewport, surface: (u32, u32)) -> Option<(f32, f32, f32, f32)> {
    let x0 = viewport.x_origin.max(0) as i64;
    let y0 = viewport.y_origin.max(0) as i64;
    let x1 = (viewport.x_origin as i64 + viewport.width as i64).min(surface.0 as i64);
    let y1 = (viewport.y_origin as i64 + viewport.height as i64).min(surface.1 as i64);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((
        x0 as f32,
        y0 as f32,
        (x1 - x0) as f32,
        (y1 - y0) as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_rect_inside_surface_passes_through() {
        let mut viewport = Viewport::new(1920, 1080);
        viewport.handle_resize(1280, 1024);
        let rect = letterbox_rect(&viewport, (1280, 1024));
        assert_eq!(rect, Some((0.0, 152.0, 1280.0, 720.0)));
    }

    #[test]
    fn test_letterbox_rect_clamps_negative_origin() {
        let mut viewport = Viewport::new(1920, 1080);
        viewport.handle_resize(2560, 1080);
        // Logical 2560x1440 hangs off a 2560x1080 surface on both ends.
        let rect = letterbox_rect(&viewport, (2560, 1080));
        assert_eq!(rect, Some((0.0, 0.0, 2560.0, 1080.0)));
    }

    #[test]
    fn test_letterbox_rect_rejects_empty_intersection() {
        let viewport = Viewport::new(1920, 1080);
        assert_eq!(letterbox_rect(&viewport, (0, 0)), None);
    }
}
