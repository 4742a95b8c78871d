//! Picking the nearest interval on a cycle.
//!
//! Given a current position (say, an arrival time) and a set of target
//! intervals (photo windows), two policies pick the "closest" one:
//!
//! - [`select_nearest_circular`] measures circular distance to each interval
//!   centre, looking both ways around the cycle.
//! - [`select_nearest_naive_forward`] only looks forward without wrapping and,
//!   when nothing is left later in the cycle, falls back to the first interval
//!   one full period later.
//!
//! Just after a late window has passed, the naive policy waits most of a day
//! for tomorrow's morning window while the circular policy notices that the
//! afternoon window is closer.

use nalgebra::RealField;
use tracing::{debug, trace};

use crate::embedding::circular_distance;
use crate::error::CircularError;
use crate::math::scalar::{degenerate_tolerance, lit};
use crate::naive::{is_meaningful, magnitude_gap};
use crate::period::Period;

/// Half-open interval `[start, end)` on a cycle, running forward from `start`.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<T>
where
    T: RealField + Copy,
{
    name: Option<String>,
    start: T,
    end: T,
    length: T,
    center: T,
    period: Period<T>,
}

impl<T> Interval<T>
where
    T: RealField + Copy,
{
    /// # Errors
    /// [`CircularError::EmptyInterval`] when `start ≡ end (mod P)`.
    pub fn new(start: T, end: T, period: Period<T>) -> Result<Self, CircularError> {
        Self::build(None, start, end, period)
    }

    /// Like [`Interval::new`], with a display name.
    pub fn named(
        name: impl Into<String>,
        start: T,
        end: T,
        period: Period<T>,
    ) -> Result<Self, CircularError> {
        Self::build(Some(name.into()), start, end, period)
    }

    fn build(
        name: Option<String>,
        start: T,
        end: T,
        period: Period<T>,
    ) -> Result<Self, CircularError> {
        let length = period.normalize(end - start);
        if length <= T::zero() {
            return Err(CircularError::EmptyInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let start = period.normalize(start);
        Ok(Self {
            name,
            start,
            end: period.normalize(end),
            length,
            // Midpoint of the forward arc; the shortest-arc midpoint would
            // pick the wrong side for intervals longer than half the cycle.
            center: period.normalize(start + length * lit(0.5)),
            period,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Start, normalised into `[0, P)`.
    pub fn start(&self) -> T {
        self.start
    }

    /// End, normalised into `[0, P)`.
    pub fn end(&self) -> T {
        self.end
    }

    /// Forward length from start to end, in `(0, P)`.
    pub fn length(&self) -> T {
        self.length
    }

    /// Representative point used for distance comparisons.
    pub fn center(&self) -> T {
        self.center
    }

    pub fn period(&self) -> Period<T> {
        self.period
    }

    /// Whether `value` falls inside `[start, end)` on the cycle.
    pub fn contains(&self, value: T) -> bool {
        self.period.normalize(value - self.start) < self.length
    }
}

/// The interval a policy picked and how far away it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection<'a, T>
where
    T: RealField + Copy,
{
    /// Position of `interval` in the input slice.
    pub index: usize,
    pub interval: &'a Interval<T>,
    pub distance: T,
}

fn check_intervals<T>(intervals: &[Interval<T>], period: Period<T>) -> Result<(), CircularError>
where
    T: RealField + Copy,
{
    if intervals.is_empty() {
        return Err(CircularError::EmptyInput);
    }
    intervals
        .iter()
        .try_for_each(|interval| period.ensure_matches(&interval.period))
}

/// Interval whose centre is circularly closest to `position`.
///
/// Distances that differ only by rounding noise count as ties, and ties keep
/// the interval that appears first.
///
/// # Errors
/// [`CircularError::EmptyInput`] for no intervals,
/// [`CircularError::PeriodMismatch`] if an interval uses another period.
pub fn select_nearest_circular<'a, T>(
    position: T,
    intervals: &'a [Interval<T>],
    period: Period<T>,
) -> Result<Selection<'a, T>, CircularError>
where
    T: RealField + Copy,
{
    check_intervals(intervals, period)?;
    let tie = degenerate_tolerance::<T>() * period.length();

    let mut best: Option<(usize, T)> = None;
    for (i, interval) in intervals.iter().enumerate() {
        let distance = circular_distance(position, interval.center, period);
        trace!(index = i, center = %interval.center, distance = %distance, "circular candidate");
        match best {
            None => best = Some((i, distance)),
            Some((_, best_distance)) if distance < best_distance - tie => {
                best = Some((i, distance))
            }
            _ => {}
        }
    }

    let (index, distance) = best.ok_or(CircularError::EmptyInput)?;
    Ok(Selection {
        index,
        interval: &intervals[index],
        distance,
    })
}

/// Interval a forward-only, non-wrapping search picks from `position`.
///
/// Among centres numerically greater than `position` the one with the
/// smallest `center - position` wins (ties keep the first). If none is left,
/// the first interval is chosen at `center + P - position`.
///
/// # Errors
/// Same as [`select_nearest_circular`].
pub fn select_nearest_naive_forward<'a, T>(
    position: T,
    intervals: &'a [Interval<T>],
    period: Period<T>,
) -> Result<Selection<'a, T>, CircularError>
where
    T: RealField + Copy,
{
    check_intervals(intervals, period)?;

    let mut best: Option<(usize, T)> = None;
    for (i, interval) in intervals.iter().enumerate() {
        if interval.center > position {
            let wait = interval.center - position;
            match best {
                None => best = Some((i, wait)),
                Some((_, best_wait)) if wait < best_wait => best = Some((i, wait)),
                _ => {}
            }
        }
    }

    let (index, distance) = match best {
        Some(found) => found,
        None => {
            let first = &intervals[0];
            debug!(
                position = %position,
                "nothing later in the cycle, naive search waits for the first interval"
            );
            (0, first.center + period.length() - position)
        }
    };

    Ok(Selection {
        index,
        interval: &intervals[index],
        distance,
    })
}

/// Both selections for one position, and whether they tell a different story.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowComparison<'a, T>
where
    T: RealField + Copy,
{
    pub circular: Selection<'a, T>,
    pub naive: Selection<'a, T>,
    /// The policies picked different intervals.
    pub differs: bool,
    /// `|naive wait - circular wait|`.
    pub wait_gap: T,
    /// `differs`, or the waits are further apart than the threshold.
    pub meaningful: bool,
}

/// Run both selection policies from `position`.
///
/// # Errors
/// As the selectors, plus [`CircularError::InvalidThreshold`] for a negative
/// or non-finite `wait_gap_threshold`.
pub fn compare_windows<'a, T>(
    position: T,
    intervals: &'a [Interval<T>],
    period: Period<T>,
    wait_gap_threshold: T,
) -> Result<WindowComparison<'a, T>, CircularError>
where
    T: RealField + Copy,
{
    if !wait_gap_threshold.is_finite() || wait_gap_threshold < T::zero() {
        return Err(CircularError::InvalidThreshold(
            wait_gap_threshold.to_string(),
        ));
    }

    let circular = select_nearest_circular(position, intervals, period)?;
    let naive = select_nearest_naive_forward(position, intervals, period)?;
    let differs = circular.index != naive.index;
    let wait_gap = magnitude_gap(naive.distance, circular.distance);

    Ok(WindowComparison {
        circular,
        naive,
        differs,
        wait_gap,
        meaningful: differs || is_meaningful(wait_gap, wait_gap_threshold),
    })
}

/// Wait thresholds for [`WaitQuality`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityThresholds<T> {
    /// Below this the wait counts as imminent.
    pub imminent: T,
    /// Below this (and not imminent) the wait counts as short.
    pub short: T,
}

impl<T> Default for QualityThresholds<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self {
            imminent: T::one(),
            short: lit(3.0),
        }
    }
}

/// Coarse rating of how well a position sits relative to its windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitQuality {
    InWindow,
    Imminent,
    Short,
    Long,
}

impl WaitQuality {
    /// Rate `position` given the circular `wait` to the nearest window.
    pub fn assess<T>(
        position: T,
        intervals: &[Interval<T>],
        wait: T,
        thresholds: QualityThresholds<T>,
    ) -> Self
    where
        T: RealField + Copy,
    {
        if intervals.iter().any(|interval| interval.contains(position)) {
            WaitQuality::InWindow
        } else if wait < thresholds.imminent {
            WaitQuality::Imminent
        } else if wait < thresholds.short {
            WaitQuality::Short
        } else {
            WaitQuality::Long
        }
    }
}
