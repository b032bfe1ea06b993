//! Observation hooks for watching a transform execute.
//!
//! A [`Trace`] implementation is notified at every algorithmic boundary of
//! the decimation-in-frequency transform: the whole run, each stage, each
//! group, and each butterfly, with the operand values before and after the
//! operation. Every method has a no-op default, so an observer only pays for
//! the events it cares about, and [`NoTrace`] pays for none. Hooks receive
//! `&self` and cannot alter control flow or buffer contents.

use crate::num::{Complex, Float};

/// Location of one butterfly inside the stage/group decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButterflySite {
    /// Stage index, `0..log2(n)`.
    pub stage: usize,
    /// Group index within the stage, `0..2^stage`.
    pub group: usize,
    /// Butterfly index within the group.
    pub index: usize,
    /// Twiddle table index, `index << stage`.
    pub k: usize,
    /// Buffer position of the first operand.
    pub i1: usize,
    /// Buffer position of the second operand, `i1 + groupsize`.
    pub i2: usize,
}

/// Observer notified at each boundary of a transform.
#[allow(unused_variables)]
pub trait Trace<T: Float> {
    /// Whole transform is about to run over `length` samples in `stages`
    /// butterfly passes.
    fn fft_start(&self, length: usize, stages: usize) {}
    /// All stages have completed (the bit-reversal pass follows).
    fn fft_end(&self, length: usize, stages: usize) {}
    fn stage_start(&self, stage: usize, groups: usize, groupsize: usize) {}
    fn stage_end(&self, stage: usize, groups: usize) {}
    fn group_start(&self, stage: usize, group: usize, butterflies: usize) {}
    fn group_end(&self, stage: usize, group: usize, butterflies: usize) {}
    /// One butterfly is about to combine operands `a` and `b`.
    fn butterfly_start(&self, site: &ButterflySite, a: Complex<T>, b: Complex<T>) {}
    /// One butterfly finished: `x = a + b` and `y = (a - b) * w[k]` were
    /// written back to `site.i1` and `site.i2`.
    fn butterfly_end(
        &self,
        site: &ButterflySite,
        a: Complex<T>,
        b: Complex<T>,
        x: Complex<T>,
        y: Complex<T>,
    ) {
    }
}

/// The zero-cost default observer: every event is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl<T: Float> Trace<T> for NoTrace {}

/// Observer that mirrors the event tree onto the [`log`] facade.
///
/// Transform and stage boundaries go to `debug`, the per-butterfly firehose
/// to `trace`.
#[cfg(feature = "verbose-logging")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

#[cfg(feature = "verbose-logging")]
impl<T: Float> Trace<T> for LogTrace {
    fn fft_start(&self, length: usize, stages: usize) {
        log::debug!("fft start: length={} stages={}", length, stages);
    }
    fn fft_end(&self, length: usize, stages: usize) {
        log::debug!("fft end: length={} stages={}", length, stages);
    }
    fn stage_start(&self, stage: usize, groups: usize, groupsize: usize) {
        log::debug!(
            "stage {}: groups={} groupsize={}",
            stage,
            groups,
            groupsize
        );
    }
    fn group_start(&self, stage: usize, group: usize, butterflies: usize) {
        log::trace!(
            "stage {} group {}: butterflies={}",
            stage,
            group,
            butterflies
        );
    }
    fn butterfly_start(&self, site: &ButterflySite, a: Complex<T>, b: Complex<T>) {
        log::trace!(
            "butterfly {}/{}/{}: k={} i1={} i2={} a={:?} b={:?}",
            site.stage,
            site.group,
            site.index,
            site.k,
            site.i1,
            site.i2,
            a,
            b
        );
    }
    fn butterfly_end(
        &self,
        site: &ButterflySite,
        a: Complex<T>,
        b: Complex<T>,
        x: Complex<T>,
        y: Complex<T>,
    ) {
        log::trace!(
            "butterfly {}/{}/{}: {:?} => {:?}, {:?} => {:?}",
            site.stage,
            site.group,
            site.index,
            a,
            x,
            b,
            y
        );
    }
}
