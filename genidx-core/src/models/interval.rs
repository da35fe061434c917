///
/// Scalar value of a parsed record used for per-chromosome statistics, such as a
/// peak p-value or a variant quality. Records without one report `NaN`.
///
pub trait Scored {
    fn value(&self) -> f64;
}

impl Scored for () {
    fn value(&self) -> f64 {
        f64::NAN
    }
}

///
/// A genomic interval read from a file, together with its format-specific payload.
///
/// Coordinates are only ever set from successfully parsed integers and cannot change
/// after construction.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Interval<P> {
    left: i64,
    right: i64,
    hash_key: u32,
    payload: P,
}

impl<P> Interval<P> {
    pub fn new(left: i64, right: i64, hash_key: u32, payload: P) -> Self {
        Interval {
            left,
            right,
            hash_key,
            payload,
        }
    }

    #[inline]
    pub fn left(&self) -> i64 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.right
    }

    #[inline]
    pub fn hash_key(&self) -> u32 {
        self.hash_key
    }

    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    ///
    /// Width of the interval, `right - left`.
    ///
    /// Widened to `i128` so any pair of `i64` coordinates has a width.
    ///
    #[inline]
    pub fn width(&self) -> i128 {
        self.right as i128 - self.left as i128
    }
}

impl<P: Scored> Interval<P> {
    #[inline]
    pub fn value(&self) -> f64 {
        self.payload.value()
    }
}
