//! Coarse orientation decisions.
//!
//! Two classifiers live here: the six-face [`Direction`] used to pick a
//! display rotation, and the hand-tuned "face up" acceptance region used
//! for display wake decisions. Both operate on sign-corrected samples as
//! returned by [`accel`](crate::sensor::Bma4::accel).

use crate::accel::AccelSample;

/// Which face or edge of the device points down, judged from a single
/// gravity sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Direction {
    /// Display facing down (z dominant, positive).
    DispDown,
    /// Display facing up (z dominant, negative).
    DispUp,
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
}

impl Direction {
    /// Classify a sample by its dominant axis.
    ///
    /// The axis with the strictly greatest magnitude wins; its sign picks
    /// between the two opposing labels. Any tie falls through to the
    /// x-axis branch, so equal-magnitude samples always classify as
    /// `BottomEdge` (x >= 0) or `TopEdge` (x < 0).
    pub fn classify(sample: &AccelSample) -> Self {
        let abs_x = sample.x.unsigned_abs();
        let abs_y = sample.y.unsigned_abs();
        let abs_z = sample.z.unsigned_abs();

        if abs_z > abs_x && abs_z > abs_y {
            if sample.z > 0 {
                Direction::DispDown
            } else {
                Direction::DispUp
            }
        } else if abs_y > abs_x && abs_y > abs_z {
            if sample.y > 0 {
                Direction::LeftEdge
            } else {
                Direction::RightEdge
            }
        } else if sample.x < 0 {
            Direction::TopEdge
        } else {
            Direction::BottomEdge
        }
    }
}

// Empirically calibrated "lying face up, crown toward the wrist" region
// for the supported watch body, in raw counts at 2G/12-bit. These bounds
// are hand-tuned acceptance limits, not a gravity-vector computation.
const FACE_UP_X: core::ops::RangeInclusive<i16> = -700..=0;
const FACE_UP_Y: core::ops::RangeInclusive<i16> = -300..=300;
const FACE_UP_Z: core::ops::RangeInclusive<i16> = -1070..=-750;

/// True when the sample sits inside the calibrated face-up box.
pub fn face_up(sample: &AccelSample) -> bool {
    FACE_UP_X.contains(&sample.x) && FACE_UP_Y.contains(&sample.y) && FACE_UP_Z.contains(&sample.z)
}
