//! Aspect-ratio-preserving viewport and its orthographic projection.
//!
//! The draw area is held at a fixed 16:9 aspect ratio. On resize, the new
//! window width is taken as authoritative: the logical height is derived
//! from it, and the leftover window height becomes a vertical letterbox
//! offset. A resize that does not change the width changes nothing -- the
//! height-only passthrough is deliberate, inherited behavior.

use glam::Mat4;

pub const TARGET_ASPECT_RATIO: f32 = 16.0 / 9.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniform {
    pub proj: [[f32; 4]; 4],
}

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub x_origin: i32,
    pub y_origin: i32,
    pub aspect_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x_origin: 0,
            y_origin: 0,
            aspect_ratio: TARGET_ASPECT_RATIO,
        }
    }

    /// React to a window resize notification. Returns whether the viewport
    /// changed.
    pub fn handle_resize(&mut self, new_width: u32, new_height: u32) -> bool {
        if new_width == self.width {
            log::debug!(
                "Ignoring resize to {}x{}: width unchanged",
                new_width,
                new_height
            );
            return false;
        }
        self.width = new_width;
        self.height = (new_width as f32 / self.aspect_ratio) as u32;
        self.y_origin = ((new_height as f64 - self.height as f64) * 0.5).round() as i32;
        true
    }

    /// Orthographic projection mapping pixel space [0,w]x[0,h] to NDC:
    /// scale (2/w, 2/h), translate (-1, -1).
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            0.0,
            self.width as f32,
            0.0,
            self.height as f32,
            -1.0,
            1.0,
        )
    }

    pub fn build_uniform(&self) -> ProjectionUniform {
        ProjectionUniform {
            proj: self.projection().to_cols_array_2d(),
        }
    }
}
