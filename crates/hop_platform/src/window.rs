//! Window creation. The demo opens at the 16:9 resolution its viewport
//! math treats as native; the OS may hand back something else, and the
//! resize path takes it from there.

use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            title: "Hop".to_string(),
            width: 1920,
            height: 1080,
        }
    }
}

pub fn create_window(event_loop: &ActiveEventLoop, config: &PlatformConfig) -> Arc<Window> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

    let window = event_loop
        .create_window(attrs)
        .expect("Failed to create window");
    log::info!(
        "Window created: {}x{} (\"{}\")",
        config.width,
        config.height,
        config.title
    );
    Arc::new(window)
}
