//! Text-over-background rendering for posters and animated GIFs.
//!
//! Composition: the background is fitted inside the central 60% of an
//! 800x600 canvas, a dark translucent layer covers the whole canvas, and the
//! text is drawn in white, wrapped and centered. Output is deterministic for
//! identical inputs.

use ab_glyph::{FontArc, PxScale};
use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{Delay, DynamicImage, Frame, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size, Blend};
use imageproc::rect::Rect;
use std::path::PathBuf;

use super::error::RenderError;
use super::PosterFormat;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
const BACKGROUND_FIT: f32 = 0.6;
const BASE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OVERLAY_COLOR: Rgba<u8> = Rgba([0, 0, 0, 200]);
const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FONT_SIZE: f32 = 40.0;
const LINE_HEIGHT: i32 = 48;
const TEXT_MARGIN: i32 = 40;
const JPEG_QUALITY: u8 = 90;

pub const GIF_FRAME_COUNT: u32 = 10;
pub const GIF_FRAME_OFFSET: i32 = 10;
const GIF_FRAME_DELAY_MS: u32 = 100;
const GIF_SPEED: i32 = 10;

static FONT_DATA: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

pub struct PosterRenderer {
    font: FontArc,
    backgrounds_dir: PathBuf,
}

impl PosterRenderer {
    pub fn new(backgrounds_dir: PathBuf) -> Result<Self, RenderError> {
        let font = FontArc::try_from_slice(FONT_DATA)
            .map_err(|e| RenderError::Font(e.to_string()))?;
        Ok(Self {
            font,
            backgrounds_dir,
        })
    }

    /// Render a single poster and encode it in the requested format
    pub fn render_poster(
        &self,
        text: &str,
        background: &str,
        format: PosterFormat,
    ) -> Result<Vec<u8>, RenderError> {
        let background = self.load_background(background)?;
        let canvas = self.compose(&background, text, 0);

        let mut bytes = Vec::new();
        match format {
            PosterFormat::Png => canvas.write_with_encoder(PngEncoder::new(&mut bytes))?,
            PosterFormat::Jpeg => {
                let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY))?
            }
        }

        tracing::debug!(
            format = format.extension(),
            size_bytes = bytes.len(),
            "Poster rendered"
        );

        Ok(bytes)
    }

    /// Render a looping GIF where the text drifts down a few pixels per frame
    pub fn render_animation(&self, text: &str, background: &str) -> Result<Vec<u8>, RenderError> {
        let background = self.load_background(background)?;

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, GIF_SPEED);
            encoder.set_repeat(Repeat::Infinite)?;

            for i in 0..GIF_FRAME_COUNT {
                let canvas = self.compose(&background, text, i as i32 * GIF_FRAME_OFFSET);
                let frame = Frame::from_parts(
                    canvas,
                    0,
                    0,
                    Delay::from_numer_denom_ms(GIF_FRAME_DELAY_MS, 1),
                );
                encoder.encode_frame(frame)?;
            }
        }

        tracing::debug!(
            frames = GIF_FRAME_COUNT,
            size_bytes = bytes.len(),
            "Animation rendered"
        );

        Ok(bytes)
    }

    fn load_background(&self, name: &str) -> Result<RgbaImage, RenderError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(RenderError::InvalidBackground(name.to_string()));
        }

        let path = self.backgrounds_dir.join(name);
        let image = image::open(&path).map_err(|source| RenderError::Background {
            name: name.to_string(),
            source,
        })?;

        Ok(image.to_rgba8())
    }

    fn compose(&self, background: &RgbaImage, text: &str, text_offset: i32) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BASE_COLOR);

        let fitted = fit_background(background);
        let x = (CANVAS_WIDTH - fitted.width()) / 2;
        let y = (CANVAS_HEIGHT - fitted.height()) / 2;
        imageops::overlay(&mut canvas, &fitted, x as i64, y as i64);

        let mut blended = Blend(canvas);
        draw_filled_rect_mut(
            &mut blended,
            Rect::at(0, 0).of_size(CANVAS_WIDTH, CANVAS_HEIGHT),
            OVERLAY_COLOR,
        );
        let mut canvas = blended.0;

        self.draw_centered_text(&mut canvas, text, text_offset);
        canvas
    }

    fn draw_centered_text(&self, canvas: &mut RgbaImage, text: &str, offset: i32) {
        let scale = PxScale::from(FONT_SIZE);
        let max_width = CANVAS_WIDTH as i32 - 2 * TEXT_MARGIN;
        let lines = self.wrap(text, scale, max_width);

        let block_height = lines.len() as i32 * LINE_HEIGHT;
        let top = (CANVAS_HEIGHT as i32 - block_height) / 2 + offset;

        for (index, line) in lines.iter().enumerate() {
            let (width, _) = text_size(scale, &self.font, line);
            let x = (CANVAS_WIDTH as i32 - width as i32) / 2;
            let y = top + index as i32 * LINE_HEIGHT;
            draw_text_mut(canvas, TEXT_COLOR, x, y, scale, &self.font, line);
        }
    }

    /// Greedy word wrap. Explicit newlines are kept; a single word wider than
    /// the line gets a line of its own.
    fn wrap(&self, text: &str, scale: PxScale, max_width: i32) -> Vec<String> {
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{} {}", current, word)
                };

                let (width, _) = text_size(scale, &self.font, &candidate);
                if width as i32 <= max_width || current.is_empty() {
                    current = candidate;
                } else {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                }
            }
            if !current.is_empty() {
                lines.push(current);
            }
        }

        lines
    }
}

/// Scale the background to fit inside the central area, keeping its aspect ratio
fn fit_background(background: &RgbaImage) -> RgbaImage {
    let max_width = CANVAS_WIDTH as f32 * BACKGROUND_FIT;
    let max_height = CANVAS_HEIGHT as f32 * BACKGROUND_FIT;
    let ratio = (max_width / background.width() as f32)
        .min(max_height / background.height() as f32);

    let width = (background.width() as f32 * ratio).round() as u32;
    let height = (background.height() as f32 * ratio).round() as u32;
    let width = width.clamp(1, max_width as u32);
    let height = height.clamp(1, max_height as u32);

    imageops::resize(background, width, height, FilterType::Triangle)
}
