//! Native window creation

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::config::Config;

pub fn create_window(event_loop: &ActiveEventLoop, config: &Config) -> Arc<Window> {
    let attrs = WindowAttributes::default()
        .with_title(&config.caption)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

    let window = event_loop
        .create_window(attrs)
        .expect("Failed to create window");
    Arc::new(window)
}
