//! Conversion of render targets to `image` buffers

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Dimensions, HasDimensions};
use crate::pixel::UnsignedColor;
use crate::resource::Resource;

/// Types that can be copied into an `image::ImageBuffer`
pub trait ImageResource<P> where P: image::Pixel {
    fn copy_to_image(&self) -> Option<image::ImageBuffer<P, Vec<P::Subpixel>>>;
}

impl ImageResource<Rgb<u8>> for Resource<UnsignedColor> {
    fn copy_to_image(&self) -> Option<RgbImage> {
        let mut res = Vec::with_capacity(self.number_of_elements() * 3);

        for color in self {
            res.push(color.r);
            res.push(color.g);
            res.push(color.b);
        }

        RgbImage::from_raw(self.stride() as u32, self.height() as u32, res)
    }
}

/// Copies a row-major color resource into an RGB image.
///
/// Returns `None` if the resource does not hold a whole number of rows.
pub fn to_rgb_image(resource: &Resource<UnsignedColor>) -> Option<RgbImage> {
    resource.copy_to_image()
}

/// Writes a color resource to `path`, with the format chosen from the file extension.
///
/// Fails with `InvalidViewport` if the resource does not describe a whole image.
pub fn save_resource<P: AsRef<Path>>(resource: &Resource<UnsignedColor>, path: P) -> RenderResult<()> {
    let Dimensions { width, height } = resource.dimensions();

    let image = to_rgb_image(resource).ok_or(RenderError::InvalidViewport { width, height })?;

    image.save(path)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_rgb_image() {
        let mut resource = Resource::<UnsignedColor>::with_dimensions(3, 2).unwrap();
        *resource.item_at_mut(2, 1).unwrap() = UnsignedColor::new(10, 20, 30);

        let image = to_rgb_image(&resource).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(*image.get_pixel(2, 1), Rgb([10, 20, 30]));
        assert_eq!(*image.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
