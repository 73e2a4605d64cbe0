//! Decoded planes and neighborhood windows
//!
//! A scaling pass decodes the source once into a [`DecodedImage`]: one plane
//! of Work colors and one plane of Key colors. Kernels then read it through
//! a [`NeighborWindow`] (upscalers) or a [`SourceBlock`] (downscalers).
//!
//! Window offsets run from -2 to +2 on each axis; [`NeighborWindow::key_far`]
//! serves the rare tap beyond that. Offsets that fall outside the image are
//! clamped to the nearest edge pixel (replicate-edge), so every offset a
//! kernel can ask for has a defined value.

use crate::pipeline::{Decode, Project};
use crate::raster::RasterView;

/// Largest offset a [`NeighborWindow`] serves on either axis.
pub const MAX_RADIUS: i32 = 2;

/// Tightly packed 2D array of decoded values.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Plane<T> {
    /// Wrap a row-major buffer of `width * height` values.
    ///
    /// Returns `None` if the length does not match or a dimension is zero.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != width * height {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Map every pixel of a raster view.
    pub fn map_view<S: Copy>(src: &RasterView<'_, S>, mut f: impl FnMut(S) -> T) -> Self {
        let width = src.width() as usize;
        let height = src.height() as usize;
        let mut data = Vec::with_capacity(width * height);
        for y in 0..src.height() {
            data.extend(src.row(y).iter().map(|&p| f(p)));
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Map every value of another plane.
    pub fn map<U: Copy>(&self, f: impl FnMut(&T) -> U) -> Plane<U> {
        Plane {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the plane.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    /// Value with replicate-edge clamping.
    #[inline]
    pub fn at_clamped(&self, x: i64, y: i64) -> T {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[y * self.width + x]
    }

    /// Values of row `y`.
    pub fn row(&self, y: usize) -> &[T] {
        &self.data[y * self.width..(y + 1) * self.width]
    }
}

/// Source image decoded into Key and Work planes.
#[derive(Debug, Clone)]
pub struct DecodedImage<K, W> {
    keys: Plane<K>,
    works: Plane<W>,
}

impl<K: Copy, W: Copy> DecodedImage<K, W> {
    /// Decode and project every source pixel once.
    pub fn decode<S, D, P>(src: &RasterView<'_, S>, decoder: &D, projector: &P) -> Self
    where
        S: Copy,
        D: Decode<S, W>,
        P: Project<W, K>,
    {
        let works = Plane::map_view(src, |p| decoder.decode(p));
        Self::from_works(works, projector)
    }

    /// Build the Key plane from an already decoded Work plane.
    pub fn from_works<P: Project<W, K>>(works: Plane<W>, projector: &P) -> Self {
        let keys = works.map(|&w| projector.project(w));
        Self { keys, works }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.works.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.works.height()
    }

    pub fn keys(&self) -> &Plane<K> {
        &self.keys
    }

    pub fn works(&self) -> &Plane<W> {
        &self.works
    }

    /// Window centered on `(x, y)`.
    #[inline]
    pub fn window(&self, x: usize, y: usize) -> NeighborWindow<'_, K, W> {
        NeighborWindow::new(self, x, y)
    }
}

#[inline]
fn clamped_offsets(center: usize, len: usize) -> [usize; 5] {
    let last = len as i64 - 1;
    let c = center as i64;
    let mut out = [0usize; 5];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (c + i as i64 - 2).clamp(0, last) as usize;
    }
    out
}

/// Read-only 5x5 neighborhood of one source pixel.
///
/// Column and row indices are clamped once at construction; lookups are
/// then plain indexing into the decoded planes.
#[derive(Debug, Clone, Copy)]
pub struct NeighborWindow<'a, K, W> {
    image: &'a DecodedImage<K, W>,
    cols: [usize; 5],
    rows: [usize; 5],
}

impl<'a, K: Copy, W: Copy> NeighborWindow<'a, K, W> {
    /// Window centered on `(x, y)` of `image`.
    ///
    /// `(x, y)` itself may lie outside the image; it is clamped like any
    /// other offset.
    pub fn new(image: &'a DecodedImage<K, W>, x: usize, y: usize) -> Self {
        let width = image.width();
        let mut rows = clamped_offsets(y, image.height());
        for r in rows.iter_mut() {
            *r *= width;
        }
        Self {
            image,
            cols: clamped_offsets(x, width),
            rows,
        }
    }

    #[inline]
    fn index(&self, dx: i32, dy: i32) -> usize {
        debug_assert!(dx.abs() <= MAX_RADIUS && dy.abs() <= MAX_RADIUS);
        self.rows[(dy + 2) as usize] + self.cols[(dx + 2) as usize]
    }

    /// Key color at offset `(dx, dy)`.
    #[inline]
    pub fn key(&self, dx: i32, dy: i32) -> K {
        self.image.keys.data[self.index(dx, dy)]
    }

    /// Work color at offset `(dx, dy)`.
    #[inline]
    pub fn work(&self, dx: i32, dy: i32) -> W {
        self.image.works.data[self.index(dx, dy)]
    }

    /// `(Key, Work)` pair at offset `(dx, dy)`.
    #[inline]
    pub fn get(&self, dx: i32, dy: i32) -> (K, W) {
        let i = self.index(dx, dy);
        (self.image.keys.data[i], self.image.works.data[i])
    }

    /// Key at any offset, including offsets past [`MAX_RADIUS`].
    ///
    /// Clamps on every call; kernels use it for the odd tap outside the
    /// 5x5 window.
    #[inline]
    pub fn key_far(&self, dx: i32, dy: i32) -> K {
        let width = self.image.width();
        let x = self.cols[2] as i64 + dx as i64;
        let y = (self.rows[2] / width) as i64 + dy as i64;
        self.image.keys.at_clamped(x, y)
    }

    /// Key of the center pixel.
    #[inline]
    pub fn center_key(&self) -> K {
        self.key(0, 0)
    }

    /// Work color of the center pixel.
    #[inline]
    pub fn center(&self) -> W {
        self.work(0, 0)
    }

    /// Keys of the 3x3 neighborhood in row-major order (index 4 is the
    /// center).
    #[inline]
    pub fn keys3x3(&self) -> [K; 9] {
        std::array::from_fn(|i| self.key(i as i32 % 3 - 1, i as i32 / 3 - 1))
    }

    /// Work colors of the 3x3 neighborhood in row-major order.
    #[inline]
    pub fn works3x3(&self) -> [W; 9] {
        std::array::from_fn(|i| self.work(i as i32 % 3 - 1, i as i32 / 3 - 1))
    }
}

/// Read-only view over the source block averaged into one output pixel.
#[derive(Debug, Clone, Copy)]
pub struct SourceBlock<'a, W> {
    plane: &'a Plane<W>,
    x0: usize,
    y0: usize,
}

impl<'a, W: Copy> SourceBlock<'a, W> {
    /// Block whose top-left source pixel is `(x0, y0)`.
    pub fn new(plane: &'a Plane<W>, x0: usize, y0: usize) -> Self {
        Self { plane, x0, y0 }
    }

    /// Work color at `(dx, dy)` inside the block, clamped to the image.
    #[inline]
    pub fn get(&self, dx: usize, dy: usize) -> W {
        let x = (self.x0 + dx).min(self.plane.width() - 1);
        let y = (self.y0 + dy).min(self.plane.height() - 1);
        self.plane.at(x, y)
    }

    /// Top-left source coordinate.
    pub fn origin(&self) -> (usize, usize) {
        (self.x0, self.y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::IdentityProject;
    use crate::raster::Raster;

    fn numbered(width: u32, height: u32) -> DecodedImage<u32, u32> {
        let r = Raster::from_fn(width, height, |x, y| x + 100 * y).unwrap();
        let works = Plane::map_view(&r.view(), |p| p);
        DecodedImage::from_works(works, &IdentityProject)
    }

    #[test]
    fn test_interior_offsets() {
        let img = numbered(7, 7);
        let w = img.window(3, 3);
        assert_eq!(w.center(), 303);
        assert_eq!(w.work(-2, -2), 101);
        assert_eq!(w.work(2, 1), 405);
        assert_eq!(w.key(-1, 2), 502);
        assert_eq!(w.get(0, -1), (203, 203));
    }

    #[test]
    fn test_replicate_edge() {
        let img = numbered(4, 3);
        let w = img.window(0, 0);
        assert_eq!(w.work(-2, -2), 0);
        assert_eq!(w.work(-1, 1), 100);
        assert_eq!(w.work(2, -1), 2);

        let w = img.window(3, 2);
        assert_eq!(w.work(2, 2), 203);
        assert_eq!(w.work(-2, 1), 201);
    }

    #[test]
    fn test_key_far() {
        let img = numbered(9, 8);
        let w = img.window(4, 4);
        assert_eq!(w.key_far(3, 0), 407);
        assert_eq!(w.key_far(0, -3), 104);
        assert_eq!(w.key_far(1, 1), w.key(1, 1));

        let w = img.window(1, 6);
        assert_eq!(w.key_far(-3, 0), 600);
        assert_eq!(w.key_far(0, 3), 701);
    }

    #[test]
    fn test_single_pixel_image() {
        let img = numbered(1, 1);
        let w = img.window(0, 0);
        for dy in -2..=2 {
            for dx in -2..=2 {
                assert_eq!(w.work(dx, dy), 0);
            }
        }
    }

    #[test]
    fn test_3x3_order() {
        let img = numbered(3, 3);
        let k = img.window(1, 1).keys3x3();
        assert_eq!(k, [0, 1, 2, 100, 101, 102, 200, 201, 202]);
    }

    #[test]
    fn test_source_block() {
        let img = numbered(5, 4);
        let b = SourceBlock::new(img.works(), 2, 2);
        assert_eq!(b.get(0, 0), 202);
        assert_eq!(b.get(1, 1), 303);
        assert_eq!(b.get(4, 4), 304);
    }

    #[test]
    fn test_plane_from_vec() {
        assert!(Plane::from_vec(2, 2, vec![1, 2, 3]).is_none());
        let p = Plane::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(p.at(1, 1), 4);
        assert_eq!(p.row(1), &[3, 4]);
        assert_eq!(p.at_clamped(-1, 5), 3);
    }
}
