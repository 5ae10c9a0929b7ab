//! Flat, fixed-size element storage with optional 2D addressing
//!
//! `Resource` is the storage primitive behind vertex buffers, index buffers,
//! color targets and the depth buffer. Its element count is fixed when it is
//! created, and every access is bounds-checked.

use std::mem;
use std::slice;

use crate::error::{RenderError, RenderResult};
use crate::geometry::{Dimensions, HasDimensions};

#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    data: Vec<T>,
    stride: usize,
}

impl<T> Resource<T> where T: Clone + Default {
    /// Creates a one-dimensional resource of `size` default-initialized elements.
    ///
    /// The stride equals the size, so the whole resource is a single row.
    pub fn new(size: usize) -> Resource<T> {
        Resource {
            data: vec![T::default(); size],
            stride: size,
        }
    }

    /// Creates a two-dimensional resource of `width * height` default-initialized elements.
    ///
    /// Fails with `ResourceTooLarge` if the element count overflows `usize`.
    pub fn with_dimensions(width: usize, height: usize) -> RenderResult<Resource<T>> {
        let size = width.checked_mul(height).ok_or(RenderError::ResourceTooLarge { width, height })?;

        Ok(Resource {
            data: vec![T::default(); size],
            stride: width,
        })
    }

    /// Sets every element to `value`
    pub fn fill(&mut self, value: T) {
        for item in &mut self.data {
            *item = value.clone();
        }
    }
}

impl<T> Resource<T> {
    /// Wraps existing elements as a one-dimensional resource
    pub fn from_vec(data: Vec<T>) -> Resource<T> {
        let stride = data.len();
        Resource { data, stride }
    }

    #[inline]
    fn out_of_range(&self, index: usize) -> RenderError {
        RenderError::IndexOutOfRange { index, len: self.data.len() }
    }

    /// Returns a reference to the element at linear index `index`
    #[inline]
    pub fn item(&self, index: usize) -> RenderResult<&T> {
        match self.data.get(index) {
            Some(item) => Ok(item),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Returns a mutable reference to the element at linear index `index`
    #[inline]
    pub fn item_mut(&mut self, index: usize) -> RenderResult<&mut T> {
        let len = self.data.len();

        self.data.get_mut(index).ok_or(RenderError::IndexOutOfRange { index, len })
    }

    /// Linear index of the 2D position `(x, y)`, or `IndexOutOfRange`.
    ///
    /// `x` must be less than the stride, so a position never wraps into the next row.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> RenderResult<usize> {
        let index = y.checked_mul(self.stride)
                     .and_then(|row| row.checked_add(x))
                     .unwrap_or(usize::MAX);

        if x < self.stride && index < self.data.len() {
            Ok(index)
        } else {
            Err(self.out_of_range(index))
        }
    }

    /// Returns a reference to the element at `(x, y)`
    #[inline]
    pub fn item_at(&self, x: usize, y: usize) -> RenderResult<&T> {
        let index = self.index_of(x, y)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `(x, y)`
    #[inline]
    pub fn item_at_mut(&mut self, x: usize, y: usize) -> RenderResult<&mut T> {
        let index = self.index_of(x, y)?;
        Ok(&mut self.data[index])
    }

    /// Logical row width used for 2D addressing
    #[inline(always)]
    pub fn stride(&self) -> usize { self.stride }

    #[inline(always)]
    pub fn number_of_elements(&self) -> usize { self.data.len() }

    #[inline]
    pub fn size_in_bytes(&self) -> usize { self.data.len() * mem::size_of::<T>() }

    /// Number of complete rows
    #[inline]
    pub fn height(&self) -> usize {
        if self.stride == 0 { 0 } else { self.data.len() / self.stride }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.data }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }

    #[inline]
    pub fn iter(&self) -> slice::Iter<T> { self.data.iter() }
}

impl<T> HasDimensions for Resource<T> {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.stride as u32, self.height() as u32)
    }
}

impl<'a, T> IntoIterator for &'a Resource<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> { self.data.iter() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_2d_and_linear_access_share_storage() {
        for &(w, h) in &[(1, 1), (3, 2), (4, 4), (7, 5)] {
            let mut resource = Resource::<u32>::with_dimensions(w, h).unwrap();

            for y in 0..h {
                for x in 0..w {
                    *resource.item_at_mut(x, y).unwrap() = (y * w + x) as u32 + 1;
                }
            }

            for y in 0..h {
                for x in 0..w {
                    let a = resource.item_at(x, y).unwrap() as *const u32;
                    let b = resource.item(y * w + x).unwrap() as *const u32;

                    assert_eq!(a, b);
                    assert_eq!(*resource.item(y * w + x).unwrap(), (y * w + x) as u32 + 1);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut resource = Resource::<f32>::with_dimensions(4, 3).unwrap();

        assert!(matches!(resource.item(12), Err(RenderError::IndexOutOfRange { index: 12, len: 12 })));
        assert!(matches!(resource.item_mut(100), Err(RenderError::IndexOutOfRange { .. })));
        assert!(matches!(resource.item_at(0, 3), Err(RenderError::IndexOutOfRange { .. })));

        // x beyond the stride would otherwise alias the next row
        assert!(matches!(resource.item_at(4, 0), Err(RenderError::IndexOutOfRange { .. })));
        assert!(matches!(resource.item_at_mut(usize::MAX, usize::MAX), Err(RenderError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_accessors() {
        let linear = Resource::<u32>::new(10);

        assert_eq!(linear.stride(), 10);
        assert_eq!(linear.number_of_elements(), 10);
        assert_eq!(linear.size_in_bytes(), 40);
        assert_eq!(linear.height(), 1);

        let grid = Resource::<u16>::with_dimensions(8, 2).unwrap();

        assert_eq!(grid.stride(), 8);
        assert_eq!(grid.number_of_elements(), 16);
        assert_eq!(grid.size_in_bytes(), 32);
        assert_eq!(grid.dimensions(), Dimensions::new(8, 2));
        assert!(grid.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_oversized_dimensions() {
        assert!(matches!(Resource::<u8>::with_dimensions(usize::MAX, 2),
                         Err(RenderError::ResourceTooLarge { width: usize::MAX, height: 2 })));
        assert!(matches!(Resource::<u8>::with_dimensions(2, usize::MAX / 2 + 1), Err(RenderError::ResourceTooLarge { .. })));

        // zero-sized grids are fine, they just hold nothing
        assert_eq!(Resource::<u8>::with_dimensions(usize::MAX, 0).unwrap().number_of_elements(), 0);
    }

    #[test]
    fn test_fill() {
        let mut resource = Resource::<i32>::with_dimensions(3, 3).unwrap();
        *resource.item_mut(4).unwrap() = 7;

        resource.fill(-1);

        assert!(resource.iter().all(|&v| v == -1));
    }

    #[test]
    fn test_empty_resource() {
        let resource = Resource::<u8>::new(0);

        assert_eq!(resource.height(), 0);
        assert!(resource.item(0).is_err());
        assert!(resource.item_at(0, 0).is_err());
    }
}
