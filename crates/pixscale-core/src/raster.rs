//! Raster surfaces
//!
//! [`Raster`] owns a pixel buffer; [`RasterView`] and [`RasterViewMut`]
//! borrow one that belongs to someone else (an I/O layer, a GUI surface,
//! another `Raster`). All three address pixels as `data[y * stride + x]`
//! and validate their geometry once at construction, so later reads and
//! writes only need ordinary slice bounds checks.

use crate::error::{Error, Result};

fn check_geometry(width: u32, height: u32, stride: usize, len: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if stride < width as usize {
        return Err(Error::InvalidStride { stride, width });
    }
    let required = (height as usize - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(width as usize))
        .ok_or(Error::InvalidDimension { width, height })?;
    if len < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(required)
}

#[inline]
fn clamp_coord(v: i64, len: u32) -> usize {
    v.clamp(0, len as i64 - 1) as usize
}

/// Owned raster of `S` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<S> {
    data: Vec<S>,
    width: u32,
    height: u32,
    stride: usize,
}

impl<S: Copy> Raster<S> {
    /// Create a raster filled with `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: S) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            data: vec![fill; len],
            width,
            height,
            stride: width as usize,
        })
    }

    /// Wrap a tightly packed buffer (`stride == width`).
    pub fn from_vec(width: u32, height: u32, data: Vec<S>) -> Result<Self> {
        Self::from_vec_with_stride(width, height, width as usize, data)
    }

    /// Wrap a buffer with an explicit row stride (in pixels).
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero, the stride is shorter
    /// than a row, or the buffer cannot hold the last row.
    pub fn from_vec_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<S>,
    ) -> Result<Self> {
        check_geometry(width, height, stride, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> S) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
            stride: width as usize,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in pixels.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<S> {
        self.view().get(x, y)
    }

    /// Pixel at `(x, y)` with coordinates clamped into the image.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> S {
        self.view().get_clamped(x, y)
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the image.
    pub fn set(&mut self, x: u32, y: u32, value: S) -> Result<()> {
        self.view_mut().set(x, y, value)
    }

    /// Pixels of row `y` (exactly `width` of them).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[S] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }

    /// Whole backing buffer, including any stride padding.
    pub fn data(&self) -> &[S] {
        &self.data
    }

    /// Consume the raster, returning the backing buffer.
    pub fn into_vec(self) -> Vec<S> {
        self.data
    }

    /// Pixels in row-major order, skipping stride padding.
    pub fn pixels(&self) -> impl Iterator<Item = S> + '_ {
        (0..self.height).flat_map(move |y| self.row(y).iter().copied())
    }

    /// Borrow as a read-only view.
    pub fn view(&self) -> RasterView<'_, S> {
        RasterView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Borrow as a writable view.
    pub fn view_mut(&mut self) -> RasterViewMut<'_, S> {
        RasterViewMut {
            data: &mut self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }
}

/// Borrowed read-only raster.
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a, S> {
    data: &'a [S],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a, S: Copy> RasterView<'a, S> {
    /// Borrow `data` as a `width` x `height` raster with the given stride.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero, the stride is shorter
    /// than a row, or `data` cannot hold the last row.
    pub fn from_slice(data: &'a [S], width: u32, height: u32, stride: usize) -> Result<Self> {
        check_geometry(width, height, stride, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<S> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.stride + x as usize])
    }

    /// Pixel with replicate-edge clamping.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> S {
        let x = clamp_coord(x, self.width);
        let y = clamp_coord(y, self.height);
        self.data[y * self.stride + x]
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &'a [S] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }
}

/// Borrowed writable raster.
#[derive(Debug)]
pub struct RasterViewMut<'a, S> {
    data: &'a mut [S],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a, S: Copy> RasterViewMut<'a, S> {
    /// Borrow `data` as a writable `width` x `height` raster.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RasterView::from_slice`].
    pub fn from_slice(data: &'a mut [S], width: u32, height: u32, stride: usize) -> Result<Self> {
        check_geometry(width, height, stride, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the image.
    pub fn set(&mut self, x: u32, y: u32, value: S) -> Result<()> {
        if x >= self.width || y >= self.height {
            let len = self.width as usize * self.height as usize;
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len,
            });
        }
        self.data[y as usize * self.stride + x as usize] = value;
        Ok(())
    }

    /// The addressable part of the buffer: from the first pixel to the last
    /// pixel of the last row.
    pub fn pixels_mut(&mut self) -> &mut [S] {
        let end = (self.height as usize - 1) * self.stride + self.width as usize;
        &mut self.data[..end]
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> RasterView<'_, S> {
        RasterView {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_access() {
        let mut r = Raster::new(3, 2, 0u32).unwrap();
        assert_eq!(r.size(), (3, 2));
        r.set(2, 1, 7).unwrap();
        assert_eq!(r.get(2, 1), Some(7));
        assert_eq!(r.get(3, 0), None);
        assert!(r.set(0, 2, 1).is_err());
        assert_eq!(r.row(1), &[0, 0, 7]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Raster::new(0, 4, 0u8),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(Raster::<u8>::from_fn(4, 0, |_, _| 0).is_err());
    }

    #[test]
    fn test_stride_validation() {
        let data = vec![0u32; 10];
        assert!(matches!(
            RasterView::from_slice(&data, 4, 2, 3),
            Err(Error::InvalidStride { .. })
        ));
        // Last row needs only `width` pixels, not a full stride
        assert!(RasterView::from_slice(&data, 4, 2, 6).is_ok());
        assert!(matches!(
            RasterView::from_slice(&data, 4, 2, 7),
            Err(Error::BufferTooSmall {
                required: 11,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_clamped_reads() {
        let r = Raster::from_fn(3, 3, |x, y| x + 10 * y).unwrap();
        assert_eq!(r.get_clamped(-5, -5), 0);
        assert_eq!(r.get_clamped(5, 0), 2);
        assert_eq!(r.get_clamped(1, 9), 21);
        assert_eq!(r.get_clamped(1, 1), 11);
    }

    #[test]
    fn test_strided_view() {
        let data: Vec<u32> = (0..12).collect();
        let v = RasterView::from_slice(&data, 3, 3, 4).unwrap();
        assert_eq!(v.row(1), &[4, 5, 6]);
        assert_eq!(v.get(2, 2), Some(10));
        assert_eq!(v.get_clamped(7, 7), 10);
    }

    #[test]
    fn test_view_mut_pixels() {
        let mut data = vec![0u8; 11];
        let mut v = RasterViewMut::from_slice(&mut data, 3, 3, 4).unwrap();
        assert_eq!(v.pixels_mut().len(), 11);
        v.set(1, 1, 9).unwrap();
        assert_eq!(v.as_view().get(1, 1), Some(9));
        assert_eq!(data[5], 9);
    }
}
