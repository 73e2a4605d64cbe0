//! Equality and distance over Key colors
//!
//! Pattern-table kernels classify neighborhoods with an [`Equality`];
//! weighted-distance kernels (xBR) rank edge directions with a [`Metric`].
//! Both must be symmetric; an Equality must also be reflexive.

use crate::color::{WorkColor, Yuv};
use crate::error::{Error, Result};

/// Same/different test over Key colors.
pub trait Equality<K>: Sync {
    fn equals(&self, a: K, b: K) -> bool;

    /// Negation of [`Equality::equals`].
    #[inline]
    fn differs(&self, a: K, b: K) -> bool {
        !self.equals(a, b)
    }
}

/// Scalar distance over Key colors.
pub trait Metric<K>: Sync {
    fn distance(&self, a: K, b: K) -> f32;
}

impl<K, T: Equality<K> + ?Sized> Equality<K> for &T {
    #[inline]
    fn equals(&self, a: K, b: K) -> bool {
        (**self).equals(a, b)
    }
}

impl<K, T: Metric<K> + ?Sized> Metric<K> for &T {
    #[inline]
    fn distance(&self, a: K, b: K) -> f32 {
        (**self).distance(a, b)
    }
}

/// Value equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactEquality;

impl<K: PartialEq> Equality<K> for ExactEquality {
    #[inline]
    fn equals(&self, a: K, b: K) -> bool {
        a == b
    }
}

fn check_tolerance(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{name} tolerance must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Two keys are equal when their distance is at most `epsilon`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdEquality<M> {
    metric: M,
    epsilon: f32,
}

impl<M> ThresholdEquality<M> {
    /// Create a tolerance-based equality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `epsilon` is negative or not
    /// finite.
    pub fn new(metric: M, epsilon: f32) -> Result<Self> {
        check_tolerance("equality", epsilon)?;
        Ok(Self { metric, epsilon })
    }

    /// Configured tolerance.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Underlying metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<K, M: Metric<K>> Equality<K> for ThresholdEquality<M> {
    #[inline]
    fn equals(&self, a: K, b: K) -> bool {
        self.metric.distance(a, b) <= self.epsilon
    }
}

/// Per-channel YUV thresholds.
///
/// Two keys differ when any channel differs by more than its threshold.
/// The defaults (Y 48, U 7, V 6, A 0) are the classic HQx values.
#[derive(Debug, Clone, Copy)]
pub struct YuvThreshold {
    y: f32,
    u: f32,
    v: f32,
    a: f32,
}

impl Default for YuvThreshold {
    fn default() -> Self {
        Self {
            y: 48.0,
            u: 7.0,
            v: 6.0,
            a: 0.0,
        }
    }
}

impl YuvThreshold {
    /// Create thresholds for each channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any threshold is negative or
    /// not finite.
    pub fn new(y: f32, u: f32, v: f32, a: f32) -> Result<Self> {
        check_tolerance("luma", y)?;
        check_tolerance("u", u)?;
        check_tolerance("v", v)?;
        check_tolerance("alpha", a)?;
        Ok(Self { y, u, v, a })
    }
}

impl Equality<Yuv> for YuvThreshold {
    #[inline]
    fn equals(&self, a: Yuv, b: Yuv) -> bool {
        (a.y - b.y).abs() <= self.y
            && (a.u - b.u).abs() <= self.u
            && (a.v - b.v).abs() <= self.v
            && (a.a - b.a).abs() <= self.a
    }
}

/// Weighted YUV distance `48|dY| + 7|dU| + 6|dV| + |dA|`.
///
/// This is the pixel difference xBR uses to score edge directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct YuvMetric;

impl Metric<Yuv> for YuvMetric {
    #[inline]
    fn distance(&self, a: Yuv, b: Yuv) -> f32 {
        48.0 * (a.y - b.y).abs()
            + 7.0 * (a.u - b.u).abs()
            + 6.0 * (a.v - b.v).abs()
            + (a.a - b.a).abs()
    }
}

/// Euclidean distance over raw channel values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMetric;

impl<K: WorkColor> Metric<K> for EuclideanMetric {
    #[inline]
    fn distance(&self, a: K, b: K) -> f32 {
        let (a, b) = (a.to_channels(), b.to_channels());
        let mut sum = 0.0f32;
        for i in 0..4 {
            let d = a[i] - b[i];
            sum += d * d;
        }
        sum.sqrt()
    }
}

/// Sum of absolute channel differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanMetric;

impl<K: WorkColor> Metric<K> for ManhattanMetric {
    #[inline]
    fn distance(&self, a: K, b: K) -> f32 {
        let (a, b) = (a.to_channels(), b.to_channels());
        (0..4).map(|i| (a[i] - b[i]).abs()).sum()
    }
}
