//! Threshold classification behavior
//!
//! Boundary values are inclusive for every range; blood pressure is
//! conjunctive over both components; risk tiers bucket the rounded
//! percentage with 20 and 50 belonging to the next-higher tier.

use pretty_assertions::assert_eq;

use vitalwatch::dashboard::state::DashboardState;
use vitalwatch::thresholds::{
    RiskTier, VitalStatus, classify_blood_pressure, classify_glucose, classify_heart_rate,
    classify_spo2, risk_percentage, risk_tier,
};

use crate::helpers::reading_with_glucose;

#[test]
fn glucose_boundaries_are_inclusive() {
    assert_eq!(classify_glucose(70.0), VitalStatus::Normal);
    assert_eq!(classify_glucose(180.0), VitalStatus::Normal);
    assert_eq!(classify_glucose(69.9), VitalStatus::Abnormal);
    assert_eq!(classify_glucose(180.1), VitalStatus::Abnormal);
}

#[test]
fn spo2_has_a_lower_bound_only() {
    assert_eq!(classify_spo2(94.0), VitalStatus::Normal);
    assert_eq!(classify_spo2(93.9), VitalStatus::Abnormal);
    // No upper bound
    assert_eq!(classify_spo2(100.0), VitalStatus::Normal);
}

#[test]
fn heart_rate_boundaries_are_inclusive() {
    assert_eq!(classify_heart_rate(50.0), VitalStatus::Normal);
    assert_eq!(classify_heart_rate(100.0), VitalStatus::Normal);
    assert_eq!(classify_heart_rate(49.0), VitalStatus::Abnormal);
    assert_eq!(classify_heart_rate(101.0), VitalStatus::Abnormal);
}

#[test]
fn blood_pressure_is_conjunctive() {
    // Both components at their inclusive edges
    assert_eq!(classify_blood_pressure(90.0, 90.0), VitalStatus::Normal);

    // Systolic out of range alone abnormalizes the pair
    assert_eq!(classify_blood_pressure(89.0, 70.0), VitalStatus::Abnormal);

    // Diastolic out of range alone abnormalizes the pair
    assert_eq!(classify_blood_pressure(120.0, 91.0), VitalStatus::Abnormal);
}

#[test]
fn risk_tiers_bucket_the_rounded_percentage() {
    assert_eq!(risk_tier(0.0), RiskTier::Low);
    assert_eq!(risk_tier(0.19), RiskTier::Low);
    assert_eq!(risk_tier(0.20), RiskTier::Medium);
    assert_eq!(risk_tier(0.49), RiskTier::Medium);
    assert_eq!(risk_tier(0.50), RiskTier::High);
    assert_eq!(risk_tier(1.0), RiskTier::High);

    // 0.195 rounds to 20, which belongs to the next-higher tier
    assert_eq!(risk_tier(0.195), RiskTier::Medium);
}

#[test]
fn risk_percentage_rounds_and_clamps() {
    assert_eq!(risk_percentage(0.194), 19);
    assert_eq!(risk_percentage(0.195), 20);
    assert_eq!(risk_percentage(1.0), 100);
    assert_eq!(risk_percentage(1.2), 100);
}

#[test]
fn live_readings_reclassify_the_vitals_display() {
    let mut state = DashboardState::new();

    state.update_vitals(reading_with_glucose(0, 210.0), None);
    let vitals = state.vitals.as_ref().unwrap();
    assert_eq!(vitals.status.glucose, VitalStatus::Abnormal);

    state.update_vitals(reading_with_glucose(5, 110.0), None);
    let vitals = state.vitals.as_ref().unwrap();
    assert_eq!(vitals.status.glucose, VitalStatus::Normal);
    assert_eq!(state.last_update, Some(vitals.reading.timestamp));
}
