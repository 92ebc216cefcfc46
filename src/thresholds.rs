//! Clinical threshold classification
//!
//! Pure functions mapping vital values to a normal/abnormal classification
//! and risk probabilities to display tiers. The ranges are also exported so
//! the UI can draw them as guide lines on the charts.

use crate::Reading;

/// Inclusive normal range for blood glucose (mg/dL)
pub const GLUCOSE_RANGE: (f64, f64) = (70.0, 180.0);

/// Minimum normal oxygen saturation (%); there is no upper bound
pub const SPO2_MIN: f64 = 94.0;

/// Inclusive normal range for heart rate (BPM)
pub const HEART_RATE_RANGE: (f64, f64) = (50.0, 100.0);

/// Inclusive normal range for systolic blood pressure (mmHg)
pub const BP_SYSTOLIC_RANGE: (f64, f64) = (90.0, 140.0);

/// Inclusive normal range for diastolic blood pressure (mmHg)
pub const BP_DIASTOLIC_RANGE: (f64, f64) = (60.0, 90.0);

/// Classification of a single vital value against its clinical range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus {
    Normal,
    Abnormal,
}

impl VitalStatus {
    fn from_range(value: f64, (min, max): (f64, f64)) -> Self {
        if value >= min && value <= max {
            VitalStatus::Normal
        } else {
            VitalStatus::Abnormal
        }
    }

    pub fn is_normal(&self) -> bool {
        *self == VitalStatus::Normal
    }
}

/// Classify blood glucose. Both bounds inclusive.
pub fn classify_glucose(value: f64) -> VitalStatus {
    VitalStatus::from_range(value, GLUCOSE_RANGE)
}

/// Classify oxygen saturation. Lower bound only: normal iff value >= 94.
pub fn classify_spo2(value: f64) -> VitalStatus {
    if value >= SPO2_MIN {
        VitalStatus::Normal
    } else {
        VitalStatus::Abnormal
    }
}

/// Classify heart rate. Both bounds inclusive.
pub fn classify_heart_rate(value: f64) -> VitalStatus {
    VitalStatus::from_range(value, HEART_RATE_RANGE)
}

/// Classify a blood pressure pair. Conjunctive: normal iff BOTH systolic
/// and diastolic fall inside their own ranges. There is no partial state.
pub fn classify_blood_pressure(systolic: f64, diastolic: f64) -> VitalStatus {
    let systolic_ok = VitalStatus::from_range(systolic, BP_SYSTOLIC_RANGE).is_normal();
    let diastolic_ok = VitalStatus::from_range(diastolic, BP_DIASTOLIC_RANGE).is_normal();

    if systolic_ok && diastolic_ok {
        VitalStatus::Normal
    } else {
        VitalStatus::Abnormal
    }
}

/// Per-metric classification of a full reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingStatus {
    pub glucose: VitalStatus,
    pub blood_pressure: VitalStatus,
    pub spo2: VitalStatus,
    pub heart_rate: VitalStatus,
}

/// Classify every metric of a reading in one pass.
pub fn classify_reading(reading: &Reading) -> ReadingStatus {
    ReadingStatus {
        glucose: classify_glucose(reading.glucose),
        blood_pressure: classify_blood_pressure(reading.bp_systolic, reading.bp_diastolic),
        spo2: classify_spo2(reading.spo2),
        heart_rate: classify_heart_rate(reading.heart_rate),
    }
}

/// Display tier for a risk probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

/// Round a probability in [0, 1] to a whole display percentage.
pub fn risk_percentage(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Bucket a risk probability into a display tier.
///
/// Tiers are derived from the rounded percentage: below 20 is low, below
/// 50 is medium, everything else is high. 20 and 50 belong to the
/// next-higher tier.
pub fn risk_tier(probability: f64) -> RiskTier {
    let percentage = risk_percentage(probability);
    if percentage < 20 {
        RiskTier::Low
    } else if percentage < 50 {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}
