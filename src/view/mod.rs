//! Rendering - paints the panel strip into a softbuffer surface
//!
//! The renderer is the carousel's external collaborator: it consumes exactly
//! one value from the core, `displayed_offset`, and applies it as a
//! horizontal translation of the strip. Panels are laid out edge to edge at
//! the current viewport width, so the strip reflows immediately on resize
//! while the core's offsets catch up at the next drop.

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use swipe::model::AppModel;
use swipe::theme::Color;

/// Side length of an indicator dot, pixels
const DOT_SIZE: usize = 8;
/// Gap between indicator dots, pixels
const DOT_GAP: usize = 10;
/// Distance from the bottom edge to the dot row, pixels
const DOT_MARGIN_BOTTOM: usize = 24;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a renderer for the given window
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Track a window resize
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width && height == self.height {
            return Ok(());
        }

        self.width = width;
        self.height = height;
        self.surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        Ok(())
    }

    /// Paint the current frame
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let width = self.width as usize;
        let height = self.height as usize;
        let panel_width = model.viewport_width;
        let offset = model.displayed_offset;
        let background = model.theme.background.to_pixel();

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to acquire surface buffer: {}", e))?;

        // Precompute one row of the strip, then stamp it down the surface.
        // Screen x maps to strip space via `x - offset`; each panel occupies
        // one viewport width of strip space.
        let mut row = vec![background; width];
        if panel_width > 0.0 {
            for (x, pixel) in row.iter_mut().enumerate() {
                let strip_x = x as f64 - offset;
                if strip_x >= 0.0 {
                    let panel = (strip_x / panel_width) as usize;
                    if let Some(color) = model.theme.panels.get(panel) {
                        *pixel = color.to_pixel();
                    }
                }
            }
        }

        for y in 0..height {
            let start = y * width;
            buffer[start..start + width].copy_from_slice(&row);
        }

        draw_indicator(&mut buffer, model, width, height);

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

}

/// Draw the panel-index dots centered near the bottom edge
fn draw_indicator(buffer: &mut [u32], model: &AppModel, width: usize, height: usize) {
    let count = model.panel_count;
    if count == 0 || height <= DOT_MARGIN_BOTTOM + DOT_SIZE {
        return;
    }

    let row_width = count * DOT_SIZE + count.saturating_sub(1) * DOT_GAP;
    if row_width >= width {
        return;
    }

    let top = height - DOT_MARGIN_BOTTOM - DOT_SIZE;
    let left = (width - row_width) / 2;

    for i in 0..count {
        let color = if i == model.carousel.active_index {
            model.theme.indicator.active
        } else {
            model.theme.indicator.inactive
        };
        let x0 = left + i * (DOT_SIZE + DOT_GAP);
        fill_rect(buffer, width, x0, top, DOT_SIZE, DOT_SIZE, color);
    }
}

/// Fill an axis-aligned rectangle, clipped to the buffer
fn fill_rect(buffer: &mut [u32], stride: usize, x: usize, y: usize, w: usize, h: usize, color: Color) {
    let pixel = color.to_pixel();
    for row in y..y + h {
        let start = row * stride + x;
        let end = (start + w).min((row + 1) * stride);
        if end > buffer.len() {
            break;
        }
        for p in &mut buffer[start..end] {
            *p = pixel;
        }
    }
}
