//! Gaussian blur compute stage

use std::f32::consts::PI;

use crate::error::{RenderError, RenderResult, StageResult};
use crate::pixel::{Color, Pixel};
use crate::resource::Resource;

use super::ComputeStage;

/// Parameters of the Gaussian blur kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurConfig {
    /// Half-width of the square kernel window in pixels, the window is `2 * radius + 1` pixels wide
    pub radius: u32,
    /// Standard deviation of the Gaussian in pixels
    pub sigma: f32,
    /// Rescale the kernel so its weights sum to one.
    ///
    /// Without it the raw Gaussian over a truncated window loses energy and the image darkens.
    pub normalize: bool,
}

impl Default for BlurConfig {
    fn default() -> BlurConfig {
        BlurConfig { radius: 5, sigma: 5.0, normalize: true }
    }
}

impl BlurConfig {
    /// Normalized kernel of the given radius and standard deviation
    pub fn new(radius: u32, sigma: f32) -> RenderResult<BlurConfig> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(RenderError::InvalidBlurConfig(sigma));
        }

        Ok(BlurConfig { radius, sigma, normalize: true })
    }

    #[inline]
    pub fn with_normalize(self, normalize: bool) -> BlurConfig {
        BlurConfig { normalize, ..self }
    }

    #[inline]
    fn window(&self) -> usize {
        2 * self.radius as usize + 1
    }
}

/// Blurs the resolved image with a Gaussian kernel, normalized unless the config says otherwise.
///
/// Samples outside the image contribute black, so the borders darken slightly.
#[derive(Debug, Clone)]
pub struct GaussianBlur {
    config: BlurConfig,
    /// Row-major `window * window` weights
    kernel: Vec<f32>,
}

impl GaussianBlur {
    pub fn new(config: BlurConfig) -> RenderResult<GaussianBlur> {
        let BlurConfig { radius, sigma, normalize } = BlurConfig::new(config.radius, config.sigma)?.with_normalize(config.normalize);

        let r = radius as i64;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut kernel = Vec::with_capacity(config.window() * config.window());

        for dy in -r..=r {
            for dx in -r..=r {
                let d2 = (dx * dx + dy * dy) as f32;
                kernel.push((-d2 / two_sigma_sq).exp() / (PI * two_sigma_sq));
            }
        }

        if normalize {
            let total: f32 = kernel.iter().sum();

            for weight in &mut kernel {
                *weight /= total;
            }
        }

        Ok(GaussianBlur { config, kernel })
    }

    #[inline]
    pub fn config(&self) -> BlurConfig { self.config }

    /// Kernel weight for the offset `(dx, dy)` from the center
    #[inline]
    pub fn weight(&self, dx: i64, dy: i64) -> f32 {
        let r = self.config.radius as i64;

        if dx.abs() > r || dy.abs() > r {
            return 0.0;
        }

        self.kernel[((dy + r) as usize) * self.config.window() + (dx + r) as usize]
    }
}

impl<P> ComputeStage<P> for GaussianBlur where P: Pixel {
    fn compute(&self, texture: &Resource<P>, index: usize) -> StageResult<P> {
        let width = texture.stride();
        let height = texture.height();

        if index >= texture.number_of_elements() || width == 0 {
            return Err(RenderError::IndexOutOfRange { index, len: texture.number_of_elements() }.into());
        }

        let (x, y) = ((index % width) as i64, (index / width) as i64);
        let r = self.config.radius as i64;

        let mut color = Color::BLACK;

        for dy in -r..=r {
            let sy = y + dy;

            if sy < 0 || sy >= height as i64 {
                continue;
            }

            for dx in -r..=r {
                let sx = x + dx;

                if sx < 0 || sx >= width as i64 {
                    continue;
                }

                let sample = texture.item_at(sx as usize, sy as usize)?.to_color();

                color += sample * self.weight(dx, dy);
            }
        }

        Ok(P::from_color(color))
    }
}

#[cfg(test)]
mod test {
    use crate::pixel::UnsignedColor;

    use super::*;

    #[test]
    fn test_invalid_sigma() {
        assert!(matches!(BlurConfig::new(3, 0.0), Err(RenderError::InvalidBlurConfig(_))));
        assert!(matches!(BlurConfig::new(3, -1.0), Err(RenderError::InvalidBlurConfig(_))));
        assert!(GaussianBlur::new(BlurConfig { radius: 2, sigma: std::f32::NAN, normalize: true }).is_err());
    }

    #[test]
    fn test_kernel_is_normalized_and_symmetric() {
        let blur = GaussianBlur::new(BlurConfig::default()).unwrap();

        let total: f32 = (-5..=5).flat_map(|dy| (-5..=5).map(move |dx| (dx, dy)))
                                 .map(|(dx, dy)| blur.weight(dx, dy))
                                 .sum();

        assert!((total - 1.0).abs() < 1e-5);
        assert_eq!(blur.weight(2, -3), blur.weight(-3, 2));
        assert!(blur.weight(0, 0) > blur.weight(1, 0));
        assert_eq!(blur.weight(6, 0), 0.0);
    }

    #[test]
    fn test_unnormalized_kernel_darkens() {
        let config = BlurConfig::default().with_normalize(false);
        let blur = GaussianBlur::new(config).unwrap();

        assert_eq!(blur.config(), config);

        // raw Gaussian weights, the 11x11 window keeps only about half of the mass for sigma = 5
        assert!((blur.weight(0, 0) - 1.0 / (std::f32::consts::PI * 50.0)).abs() < 1e-7);

        let total: f32 = (-5..=5).flat_map(|dy| (-5..=5).map(move |dx| (dx, dy)))
                                 .map(|(dx, dy)| blur.weight(dx, dy))
                                 .sum();

        assert!(total > 0.4 && total < 0.6);

        let mut texture = Resource::<Color>::with_dimensions(11, 11).unwrap();
        texture.fill(Color::new(1.0, 1.0, 1.0));

        let center: Color = blur.compute(&texture, 60).unwrap();
        assert!((center.r - total).abs() < 1e-5);
    }

    #[test]
    fn test_zero_radius_is_identity() {
        let blur = GaussianBlur::new(BlurConfig::new(0, 1.0).unwrap()).unwrap();

        let mut texture = Resource::<UnsignedColor>::with_dimensions(3, 3).unwrap();
        *texture.item_mut(4).unwrap() = UnsignedColor::new(255, 128, 0);

        for i in 0..9 {
            assert_eq!(blur.compute(&texture, i).unwrap(), *texture.item(i).unwrap());
        }
    }

    #[test]
    fn test_flat_interior_stays_flat() {
        let blur = GaussianBlur::new(BlurConfig::new(1, 1.0).unwrap()).unwrap();

        let mut texture = Resource::<Color>::with_dimensions(5, 5).unwrap();
        texture.fill(Color::new(0.5, 0.25, 1.0));

        let center: Color = blur.compute(&texture, 12).unwrap();

        assert!((center.r - 0.5).abs() < 1e-5);
        assert!((center.g - 0.25).abs() < 1e-5);
        assert!((center.b - 1.0).abs() < 1e-5);

        // corner loses the samples that fall outside the image
        let corner: Color = blur.compute(&texture, 0).unwrap();
        assert!(corner.r < 0.5 && corner.r > 0.0);
    }

    #[test]
    fn test_blur_spreads_a_single_pixel() {
        let blur = GaussianBlur::new(BlurConfig::new(1, 1.0).unwrap()).unwrap();

        let mut texture = Resource::<Color>::with_dimensions(3, 3).unwrap();
        *texture.item_at_mut(1, 1).unwrap() = Color::new(1.0, 1.0, 1.0);

        let center: Color = blur.compute(&texture, 4).unwrap();
        let edge: Color = blur.compute(&texture, 1).unwrap();
        let corner: Color = blur.compute(&texture, 0).unwrap();

        assert!((center.r - blur.weight(0, 0)).abs() < 1e-6);
        assert!((edge.r - blur.weight(0, 1)).abs() < 1e-6);
        assert!((corner.r - blur.weight(1, 1)).abs() < 1e-6);
        assert!(center.r > edge.r && edge.r > corner.r);
    }

    #[test]
    fn test_out_of_range_index() {
        let blur = GaussianBlur::new(BlurConfig::default()).unwrap();
        let texture = Resource::<Color>::with_dimensions(2, 2).unwrap();

        assert!(blur.compute(&texture, 4).is_err());
    }
}
