//! Activity classifier output.

use crate::variant::{ACTIVITY_INVALID, ACTIVITY_RUNNING, ACTIVITY_STATIONARY, ACTIVITY_WALKING};

/// User activity as reported by the on-chip step engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Activity {
    Stationary,
    Walking,
    Running,
    /// The classifier has not settled yet.
    Invalid,
    /// No classifier bit was set in the output register.
    Unknown,
}

impl Activity {
    /// Map the raw classifier bitfield. Only one bit is expected to be
    /// set; the first matching bit wins in the order below.
    pub(crate) fn from_bits(bits: u8) -> Self {
        if bits & ACTIVITY_STATIONARY != 0 {
            Activity::Stationary
        } else if bits & ACTIVITY_WALKING != 0 {
            Activity::Walking
        } else if bits & ACTIVITY_RUNNING != 0 {
            Activity::Running
        } else if bits & ACTIVITY_INVALID != 0 {
            Activity::Invalid
        } else {
            Activity::Unknown
        }
    }

    /// Fixed label tags, for logs and UI plumbing that expects strings.
    pub fn label(self) -> &'static str {
        match self {
            Activity::Stationary => "STATIONARY",
            Activity::Walking => "WALKING",
            Activity::Running => "RUNNING",
            Activity::Invalid => "STATE_INVALID",
            Activity::Unknown => "None",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bit_mapping() {
        assert_eq!(Activity::from_bits(0x01), Activity::Stationary);
        assert_eq!(Activity::from_bits(0x02), Activity::Walking);
        assert_eq!(Activity::from_bits(0x04), Activity::Running);
        assert_eq!(Activity::from_bits(0x08), Activity::Invalid);
        assert_eq!(Activity::from_bits(0x00), Activity::Unknown);
    }

    #[test]
    fn first_matching_bit_wins() {
        // malformed multi-bit output resolves in priority order
        assert_eq!(Activity::from_bits(0x03), Activity::Stationary);
        assert_eq!(Activity::from_bits(0x06), Activity::Walking);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Activity::Unknown.label(), "None");
        assert_eq!(Activity::Invalid.label(), "STATE_INVALID");
    }
}
