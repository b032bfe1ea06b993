//! Twiddle factor tables and the per-(length, direction) cache.

use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::num::{Complex, Float};

/// Transform direction. Selects the sign of the twiddle exponent; the facade
/// additionally normalizes inverse output by the transform length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    #[inline]
    fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => T::one(),
            Direction::Inverse => -T::one(),
        }
    }
}

/// Build the table of `n / 2` rotation factors for one transform.
///
/// Entry `x` is `exp(-i * 2π * sign * x / n)` with `sign = +1` for
/// [`Direction::Forward`] and `-1` for [`Direction::Inverse`]. `n` must
/// already be validated as a power of two by the caller; `n == 1` yields an
/// empty table, matching a transform with no butterflies.
pub fn twiddle_table<T: Float>(n: usize, direction: Direction) -> Vec<Complex<T>> {
    let half = n / 2;
    let step = direction.sign::<T>() * T::from_f32(2.0) * T::pi() / T::from_f32(n as f32);
    let mut table = Vec::with_capacity(half);
    for x in 0..half {
        table.push(Complex::expi(-(step * T::from_f32(x as f32))));
    }
    table
}

/// Cache of twiddle tables keyed by `(length, direction)`.
///
/// Tables are immutable after construction, so repeated transforms of the
/// same length share one allocation through [`Arc`] without synchronization.
pub struct TwiddlePlanner<T: Float> {
    cache: HashMap<(usize, Direction), Arc<[Complex<T>]>>,
}

impl<T: Float> Default for TwiddlePlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TwiddlePlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve the twiddle table for a length-`n` transform in the given
    /// direction, building and caching it on first use.
    pub fn get_twiddles(&mut self, n: usize, direction: Direction) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&(n, direction)) {
            return Arc::clone(table);
        }
        let table: Arc<[Complex<T>]> = Arc::from(twiddle_table(n, direction));
        self.cache.insert((n, direction), Arc::clone(&table));
        table
    }
}
