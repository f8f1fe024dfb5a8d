//! Saaty judgment scale value object (1/9 to 9, 17 levels).

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Relative tolerance used when matching a raw number to a scale level.
const SCALE_MATCH_TOLERANCE: f64 = 1e-6;

/// One of the 17 discrete levels of the Saaty pairwise comparison scale.
///
/// A judgment `(a, b, v)` reads "a is `v` times as important as b".
/// Serialized as its numeric value so clients exchange plain numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SaatyValue {
    OneNinth,
    OneEighth,
    OneSeventh,
    OneSixth,
    OneFifth,
    OneQuarter,
    OneThird,
    OneHalf,
    #[default]
    Equal,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl SaatyValue {
    /// All levels in ascending order.
    pub const ALL: [SaatyValue; 17] = [
        SaatyValue::OneNinth,
        SaatyValue::OneEighth,
        SaatyValue::OneSeventh,
        SaatyValue::OneSixth,
        SaatyValue::OneFifth,
        SaatyValue::OneQuarter,
        SaatyValue::OneThird,
        SaatyValue::OneHalf,
        SaatyValue::Equal,
        SaatyValue::Two,
        SaatyValue::Three,
        SaatyValue::Four,
        SaatyValue::Five,
        SaatyValue::Six,
        SaatyValue::Seven,
        SaatyValue::Eight,
        SaatyValue::Nine,
    ];

    /// Creates a SaatyValue from a raw number, returning error if it is not a scale level.
    pub fn try_from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::not_on_scale(value));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|level| (level.value() - value).abs() <= SCALE_MATCH_TOLERANCE * level.value())
            .ok_or_else(|| ValidationError::not_on_scale(value))
    }

    /// Returns the integer degree of preference, 1..=9.
    pub fn intensity(&self) -> u8 {
        match self {
            SaatyValue::OneNinth | SaatyValue::Nine => 9,
            SaatyValue::OneEighth | SaatyValue::Eight => 8,
            SaatyValue::OneSeventh | SaatyValue::Seven => 7,
            SaatyValue::OneSixth | SaatyValue::Six => 6,
            SaatyValue::OneFifth | SaatyValue::Five => 5,
            SaatyValue::OneQuarter | SaatyValue::Four => 4,
            SaatyValue::OneThird | SaatyValue::Three => 3,
            SaatyValue::OneHalf | SaatyValue::Two => 2,
            SaatyValue::Equal => 1,
        }
    }

    /// Returns true when the first element is the less important one.
    pub fn is_fractional(&self) -> bool {
        *self < SaatyValue::Equal
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        let intensity = f64::from(self.intensity());
        if self.is_fractional() {
            1.0 / intensity
        } else {
            intensity
        }
    }

    /// Returns the level for the reversed pair.
    pub fn reciprocal(&self) -> Self {
        Self::ALL[Self::ALL.len() - 1 - self.index()]
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<f64> for SaatyValue {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_f64(value)
    }
}

impl From<SaatyValue> for f64 {
    fn from(value: SaatyValue) -> Self {
        value.value()
    }
}
