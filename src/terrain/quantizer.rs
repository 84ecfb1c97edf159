//! Image-to-terrain-grid quantization

use crate::grid::Grid;
use crate::io::error::{Result, invalid_parameter};
use crate::terrain::labels::Terrain;
use image::DynamicImage;
use ndarray::Array3;

/// Reduces a source image to one terrain label per grid intersection
///
/// Each intersection owns a proportional rectangular region of the image;
/// the region's average color snaps to the nearest entry of the terrain
/// palette. Image dimensions need not divide evenly into the grid, and
/// identical inputs always quantize identically.
#[derive(Debug, Clone, Copy)]
pub struct MapQuantizer {
    width: usize,
    height: usize,
}

impl MapQuantizer {
    /// Create a quantizer targeting a `width x height` intersection grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "grid size",
                &format!("{width}x{height}"),
                &"dimensions must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Target grid width in intersections
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Target grid height in intersections
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Quantize a decoded image
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels.
    pub fn quantize(&self, image: &DynamicImage) -> Result<Grid<Terrain>> {
        let rgba = image.to_rgba8();
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);
        let mut pixels = Array3::zeros((height, width, 3));
        for (x, y, pixel) in rgba.enumerate_pixels() {
            for channel in 0..3 {
                let value = pixel.0.get(channel).copied().unwrap_or(0);
                if let Some(cell) = pixels.get_mut((y as usize, x as usize, channel)) {
                    *cell = f64::from(value);
                }
            }
        }
        self.quantize_raw(&pixels)
    }

    /// Quantize raw pixel data shaped `(height, width, rgb)`
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel array has no pixels.
    pub fn quantize_raw(&self, pixels: &Array3<f64>) -> Result<Grid<Terrain>> {
        let (img_height, img_width, _) = pixels.dim();
        if img_width == 0 || img_height == 0 {
            return Err(invalid_parameter(
                "image",
                &format!("{img_width}x{img_height}"),
                &"image has no pixels",
            ));
        }

        let mut labels = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let (x0, x1) = region_span(x, self.width, img_width);
                let (y0, y1) = region_span(y, self.height, img_height);

                let mut sum = [0.0f64; 3];
                for py in y0..y1 {
                    for px in x0..x1 {
                        for channel in 0..3 {
                            sum[channel] +=
                                pixels.get((py, px, channel)).copied().unwrap_or(0.0);
                        }
                    }
                }
                let count = ((x1 - x0) * (y1 - y0)) as f64;
                let average = [sum[0] / count, sum[1] / count, sum[2] / count];
                labels.push(nearest_terrain(average));
            }
        }

        Grid::from_cells(self.width, self.height, labels)
    }
}

// Proportional half-open pixel span for grid cell `index` of `cells`,
// guaranteed non-empty even when the image is smaller than the grid.
fn region_span(index: usize, cells: usize, pixels: usize) -> (usize, usize) {
    let start = index * pixels / cells;
    let end = ((index + 1) * pixels / cells).max(start + 1).min(pixels);
    (start.min(pixels - 1), end)
}

fn nearest_terrain(rgb: [f64; 3]) -> Terrain {
    let mut best = Terrain::PALETTE[0].0;
    let mut best_distance = f64::MAX;
    for (terrain, reference) in Terrain::PALETTE {
        let distance: f64 = rgb
            .iter()
            .zip(reference.iter())
            .map(|(channel, refchannel)| {
                let delta = channel - f64::from(*refchannel);
                delta * delta
            })
            .sum();
        if distance < best_distance {
            best_distance = distance;
            best = terrain;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(height: usize, width: usize, rgb: [f64; 3]) -> Array3<f64> {
        let mut pixels = Array3::zeros((height, width, 3));
        for y in 0..height {
            for x in 0..width {
                for c in 0..3 {
                    pixels[(y, x, c)] = rgb[c];
                }
            }
        }
        pixels
    }

    #[test]
    fn output_matches_requested_grid_size() {
        let quantizer = MapQuantizer::new(5, 3).unwrap();
        let grid = quantizer.quantize_raw(&solid(17, 23, [24.0, 60.0, 180.0])).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn solid_colors_snap_to_their_palette_entry() {
        let quantizer = MapQuantizer::new(2, 2).unwrap();
        let grid = quantizer.quantize_raw(&solid(8, 8, [50.0, 135.0, 55.0])).unwrap();
        for label in &grid {
            assert_eq!(*label, Terrain::Grass);
        }
    }

    #[test]
    fn split_image_quantizes_per_region() {
        // Left half sea-blue, right half rock-grey
        let mut pixels = solid(4, 8, [24.0, 60.0, 180.0]);
        for y in 0..4 {
            for x in 4..8 {
                for (c, v) in [128.0, 128.0, 128.0].iter().enumerate() {
                    pixels[(y, x, c)] = *v;
                }
            }
        }

        let quantizer = MapQuantizer::new(2, 1).unwrap();
        let grid = quantizer.quantize_raw(&pixels).unwrap();
        assert_eq!(*grid.get(0, 0).unwrap(), Terrain::Sea);
        assert_eq!(*grid.get(1, 0).unwrap(), Terrain::Rock);
    }

    #[test]
    fn quantization_is_deterministic() {
        let pixels = solid(9, 7, [200.0, 190.0, 120.0]);
        let quantizer = MapQuantizer::new(4, 4).unwrap();
        let first = quantizer.quantize_raw(&pixels).unwrap();
        let second = quantizer.quantize_raw(&pixels).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn image_smaller_than_grid_still_quantizes() {
        let quantizer = MapQuantizer::new(6, 6).unwrap();
        let grid = quantizer.quantize_raw(&solid(2, 2, [24.0, 60.0, 180.0])).unwrap();
        assert_eq!(grid.width(), 6);
        for label in &grid {
            assert_eq!(*label, Terrain::Sea);
        }
    }

    #[test]
    fn zero_grid_dimension_is_rejected() {
        assert!(MapQuantizer::new(0, 4).is_err());
        assert!(MapQuantizer::new(4, 0).is_err());
    }
}
