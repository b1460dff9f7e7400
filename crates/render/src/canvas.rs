//! In-memory RGB8 canvas that paints filled disks.
//!
//! Pixel (x, y) covers the unit square at integer coordinates, row-major with
//! y growing downward. World coordinates map 1:1 to pixels; anything outside
//! the canvas is clipped.

use potential_nav_core::{NavError, Position, Renderer, Srgb, WorldConfig};

/// A fixed-size RGB8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// Returns `NavError::InvalidDimensions` if either dimension is zero or
    /// the buffer size overflows `usize`.
    pub fn new(width: usize, height: usize, background: Srgb) -> Result<Self, NavError> {
        if width == 0 || height == 0 {
            return Err(NavError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(NavError::InvalidDimensions)?;
        let mut canvas = Self {
            width,
            height,
            data: vec![0; len],
        };
        canvas.clear(background);
        Ok(canvas)
    }

    /// White canvas sized to the world extent of `config`.
    pub fn for_world(config: &WorldConfig) -> Result<Self, NavError> {
        Self::new(config.width, config.height, Srgb::WHITE)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major RGB8 bytes, `width * height * 3` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Srgb) {
        let rgb = color.to_rgb8();
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&rgb);
        }
    }

    /// The pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

impl Renderer for Canvas {
    /// Fills every pixel within `radius` of the truncated integer centre.
    ///
    /// Only the part of the bounding square that overlaps the canvas is
    /// visited, so the cost is bounded by the canvas size whatever the radius.
    /// Non-finite centres are skipped.
    fn draw_disk(&mut self, center: Position, radius: u32, color: Srgb) {
        if !center.x.is_finite() || !center.y.is_finite() {
            return;
        }
        // Float-to-int casts saturate, and i128 holds every offset and square.
        let cx = i128::from(center.x as i64);
        let cy = i128::from(center.y as i64);
        let r = i128::from(radius);
        let (Some(xs), Some(ys)) = (
            clipped_span(cx, r, self.width),
            clipped_span(cy, r, self.height),
        ) else {
            return;
        };
        let rgb = color.to_rgb8();
        let r_sq = r * r;
        for y in ys.clone() {
            let dy = y as i128 - cy;
            for x in xs.clone() {
                let dx = x as i128 - cx;
                if dx * dx + dy * dy <= r_sq {
                    let i = (y * self.width + x) * 3;
                    self.data[i..i + 3].copy_from_slice(&rgb);
                }
            }
        }
    }
}

/// Pixel indices of `[c - r, c + r]` that fall inside `0..len`.
fn clipped_span(c: i128, r: i128, len: usize) -> Option<std::ops::RangeInclusive<usize>> {
    let lo = (c - r).max(0);
    let hi = (c + r).min(len as i128 - 1);
    if lo > hi {
        return None;
    }
    Some(lo as usize..=hi as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use potential_nav_core::{Navigator, World};

    const WHITE: [u8; 3] = [255, 255, 255];

    #[test]
    fn new_fills_background() {
        let canvas = Canvas::new(4, 3, Srgb::WHITE).unwrap();
        assert_eq!(canvas.data().len(), 4 * 3 * 3);
        assert!(canvas.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn zero_or_overflowing_dimensions_are_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, Srgb::WHITE),
            Err(NavError::InvalidDimensions)
        ));
        assert!(Canvas::new(10, 0, Srgb::WHITE).is_err());
        assert!(Canvas::new(usize::MAX, 2, Srgb::WHITE).is_err());
    }

    #[test]
    fn pixel_outside_canvas_is_none() {
        let canvas = Canvas::new(4, 4, Srgb::BLACK).unwrap();
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(0, 4), None);
    }

    #[test]
    fn disk_covers_centre_and_radius_but_not_corners() {
        let mut canvas = Canvas::new(20, 20, Srgb::WHITE).unwrap();
        canvas.draw_disk(Position::new(10.7, 10.2), 3, Srgb::RED);
        let red = [255, 0, 0];
        assert_eq!(canvas.pixel(10, 10), Some(red));
        assert_eq!(canvas.pixel(13, 10), Some(red));
        assert_eq!(canvas.pixel(10, 7), Some(red));
        assert_eq!(canvas.pixel(13, 13), Some(WHITE));
        assert_eq!(canvas.pixel(14, 10), Some(WHITE));
    }

    #[test]
    fn zero_radius_paints_a_single_pixel() {
        let mut canvas = Canvas::new(5, 5, Srgb::WHITE).unwrap();
        canvas.draw_disk(Position::new(2.0, 2.0), 0, Srgb::BLACK);
        let painted = canvas
            .data()
            .chunks_exact(3)
            .filter(|p| *p == [0, 0, 0])
            .count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn disks_are_clipped_at_the_edges() {
        let mut canvas = Canvas::new(8, 8, Srgb::WHITE).unwrap();
        canvas.draw_disk(Position::new(0.0, 0.0), 2, Srgb::GREEN);
        canvas.draw_disk(Position::new(-100.0, 500.0), 5, Srgb::GREEN);
        canvas.draw_disk(Position::new(f64::NAN, 1.0), 5, Srgb::GREEN);
        assert_eq!(canvas.pixel(0, 0), Some([0, 255, 0]));
        assert_eq!(canvas.pixel(2, 0), Some([0, 255, 0]));
        assert_eq!(canvas.pixel(7, 7), Some(WHITE));
    }

    #[test]
    fn maximum_radius_covers_a_small_canvas() {
        let mut canvas = Canvas::new(16, 16, Srgb::WHITE).unwrap();
        canvas.draw_disk(Position::new(8.0, 8.0), u32::MAX, Srgb::BLACK);
        assert!(canvas.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn maximum_radius_far_off_canvas_still_clips() {
        let mut canvas = Canvas::new(16, 16, Srgb::WHITE).unwrap();
        canvas.draw_disk(Position::new(-1e15, 8.0), u32::MAX, Srgb::BLACK);
        canvas.draw_disk(Position::new(8.0, 1e300), u32::MAX, Srgb::BLACK);
        assert!(canvas.data().iter().all(|&b| b == 255));

        // Centre 4e9 to the left: every pixel is within u32::MAX of it.
        canvas.draw_disk(Position::new(-4.0e9, 8.0), u32::MAX, Srgb::RED);
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(canvas.pixel(15, 15), Some([255, 0, 0]));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut canvas = Canvas::new(6, 6, Srgb::WHITE).unwrap();
        canvas.draw_disk(Position::new(3.0, 3.0), 2, Srgb::BLUE);
        canvas.clear(Srgb::WHITE);
        assert!(canvas.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn demo_run_leaves_a_trail_from_start_to_goal() {
        let config = WorldConfig::default();
        let mut world = World::from_config(&config).unwrap();
        let mut canvas = Canvas::for_world(&config).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (640, 480));

        world.draw_all(&mut canvas);
        let nav = Navigator::from_config(&config)
            .unwrap()
            .with_max_steps(10_000)
            .unwrap();
        let appearance = potential_nav_core::Drawable::appearance(world.agent());
        nav.run_with(&mut world, |record| {
            canvas.draw_disk(record.position, appearance.radius, appearance.color)
        });

        let blue = [0, 0, 255];
        assert_eq!(canvas.pixel(50, 50), Some(blue));
        assert_eq!(canvas.pixel(450, 450), Some([0, 255, 0]));
        let final_position = world.agent().position();
        assert_eq!(
            canvas.pixel(final_position.x as usize, final_position.y as usize),
            Some(blue)
        );
        assert_eq!(canvas.pixel(250, 180), Some([255, 0, 0]));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn drawing_anywhere_never_panics_and_keeps_buffer_size(
                x in -1e12_f64..1e12,
                y in -1e12_f64..1e12,
                radius in any::<u32>(),
            ) {
                let mut canvas = Canvas::new(16, 16, Srgb::WHITE).unwrap();
                canvas.draw_disk(Position::new(x, y), radius, Srgb::BLACK);
                prop_assert_eq!(canvas.data().len(), 16 * 16 * 3);
            }

            #[test]
            fn painted_pixels_lie_inside_the_disk(
                x in -8.0_f64..24.0,
                y in -8.0_f64..24.0,
                radius in 0_u32..12,
            ) {
                let mut canvas = Canvas::new(16, 16, Srgb::WHITE).unwrap();
                canvas.draw_disk(Position::new(x, y), radius, Srgb::BLACK);
                let (cx, cy, r) = (x as i64, y as i64, i64::from(radius));
                for py in 0..16_usize {
                    for px in 0..16_usize {
                        let (dx, dy) = (px as i64 - cx, py as i64 - cy);
                        let inside = dx * dx + dy * dy <= r * r;
                        let painted = canvas.pixel(px, py) == Some([0, 0, 0]);
                        prop_assert_eq!(inside, painted, "pixel ({}, {})", px, py);
                    }
                }
            }
        }
    }
}
