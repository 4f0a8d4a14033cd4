//! Bounded, stepped integer amounts backing the revenue and budget sliders.

use serde::{Deserialize, Deserializer, Serialize};

/// An integer in `[0, UPPER]` aligned to multiples of `STEP_SIZE`.
///
/// Every constructor clamps and snaps, so an out-of-range value cannot be
/// represented regardless of where it came from (slider, config, or a
/// deserialized payload). `UPPER` must be a multiple of `STEP_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Amount<const UPPER: u64, const STEP_SIZE: u64>(u64);

/// Annual revenue: `[0, 100_000_000]`, step 2000.
pub type Revenue = Amount<100_000_000, 2_000>;

/// Marketing budget: `[0, 10_000]`, step 100.
pub type Budget = Amount<10_000, 100>;

impl<const UPPER: u64, const STEP_SIZE: u64> Amount<UPPER, STEP_SIZE> {
    pub const MIN: u64 = 0;
    pub const MAX: u64 = UPPER;
    pub const STEP: u64 = STEP_SIZE;

    const ALIGNED: () = assert!(
        STEP_SIZE > 0 && UPPER % STEP_SIZE == 0,
        "upper bound must be a multiple of the step"
    );

    /// Clamp `raw` into range, then snap to the nearest step.
    #[must_use]
    pub fn new(raw: i64) -> Self {
        let () = Self::ALIGNED;
        let clamped = raw.clamp(0, i64::try_from(UPPER).unwrap_or(i64::MAX));
        Self::snapped(clamped.unsigned_abs())
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// One slider notch up, saturating at the upper bound.
    #[must_use]
    pub fn step_up(self) -> Self {
        Self(self.0.saturating_add(STEP_SIZE).min(UPPER))
    }

    /// One slider notch down, saturating at zero.
    #[must_use]
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(STEP_SIZE))
    }

    /// Move by `notches` steps (negative moves down).
    #[must_use]
    pub fn step_by(self, notches: i32) -> Self {
        let mut out = self;
        for _ in 0..notches.unsigned_abs() {
            out = if notches > 0 {
                out.step_up()
            } else {
                out.step_down()
            };
        }
        out
    }

    /// Position within the range as a ratio in `[0.0, 1.0]`.
    #[must_use]
    pub fn ratio(self) -> f64 {
        self.0 as f64 / UPPER as f64
    }

    fn snapped(value: u64) -> Self {
        let snapped = (value + STEP_SIZE / 2) / STEP_SIZE * STEP_SIZE;
        Self(snapped.min(UPPER))
    }
}

impl<const UPPER: u64, const STEP_SIZE: u64> std::fmt::Display for Amount<UPPER, STEP_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de, const UPPER: u64, const STEP_SIZE: u64> Deserialize<'de> for Amount<UPPER, STEP_SIZE> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::new)
    }
}
