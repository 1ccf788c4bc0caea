//! Property tests for the score engine.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use rodwell_core::engine::{
    compute_hours_of_life, compute_neutrophil_ratios, compute_rodwell_score,
    count_maternal_risk_factors, score_breakdown, MAX_SCORE,
};
use rodwell_core::models::{MaternalRisk, MaternalRiskFlags};

fn count() -> impl Strategy<Value = f64> {
    0.0..100_000.0f64
}

proptest! {
    #[test]
    fn score_never_exceeds_max(
        wbc in 0.0..60_000.0f64,
        bands in count(),
        ratio_it in 0.0..1.0f64,
        ratio_im in 0.0..5.0f64,
        platelets in 0.0..500_000.0f64,
        toxic in any::<bool>(),
    ) {
        let score = compute_rodwell_score(wbc, bands, ratio_it, ratio_im, platelets, toxic);
        prop_assert!(score <= MAX_SCORE);
        prop_assert_eq!(
            score,
            score_breakdown(wbc, bands, ratio_it, ratio_im, platelets, toxic).points()
        );
    }

    #[test]
    fn adding_a_condition_never_lowers_score(
        wbc in 5_000.0..30_000.0f64,
        bands in 0.0..1_600.0f64,
        ratio_it in 0.0..0.2f64,
        ratio_im in 0.0..0.3f64,
        platelets in 150_000.0..500_000.0f64,
        toxic in any::<bool>(),
    ) {
        let base = compute_rodwell_score(wbc, bands, ratio_it, ratio_im, platelets, toxic);

        prop_assert!(compute_rodwell_score(4_000.0, bands, ratio_it, ratio_im, platelets, toxic) >= base);
        prop_assert!(compute_rodwell_score(35_000.0, bands, ratio_it, ratio_im, platelets, toxic) >= base);
        prop_assert!(compute_rodwell_score(wbc, 2_000.0, ratio_it, ratio_im, platelets, toxic) >= base);
        prop_assert!(compute_rodwell_score(wbc, bands, 0.5, ratio_im, platelets, toxic) >= base);
        prop_assert!(compute_rodwell_score(wbc, bands, ratio_it, 0.5, platelets, toxic) >= base);
        prop_assert!(compute_rodwell_score(wbc, bands, ratio_it, ratio_im, 100_000.0, toxic) >= base);
        prop_assert!(compute_rodwell_score(wbc, bands, ratio_it, ratio_im, platelets, true) >= base);
    }

    #[test]
    fn risk_count_matches_checked_flags(checked in proptest::collection::vec(any::<bool>(), 7)) {
        let mut flags = MaternalRiskFlags::default();
        for (risk, on) in MaternalRisk::ALL.iter().zip(&checked) {
            flags.set(*risk, *on);
        }

        let expected = checked.iter().filter(|c| **c).count() as u32;
        let count = count_maternal_risk_factors(&flags);
        prop_assert_eq!(count, expected);
        prop_assert!(count <= 7);
    }

    #[test]
    fn ratios_are_bounded(
        segs in count(),
        bands in count(),
        metamyelocytes in count(),
        myelocytes in count(),
    ) {
        let ratios = compute_neutrophil_ratios(segs, bands, metamyelocytes, myelocytes);
        prop_assert!(ratios.ratio_it >= 0.0 && ratios.ratio_it <= 1.0);
        prop_assert!(ratios.ratio_im >= 0.0);
        prop_assert!(ratios.ratio_it.is_finite() && ratios.ratio_im.is_finite());
    }

    #[test]
    fn zero_segs_gives_zero_im(bands in count(), metamyelocytes in count(), myelocytes in count()) {
        let ratios = compute_neutrophil_ratios(0.0, bands, metamyelocytes, myelocytes);
        prop_assert_eq!(ratios.ratio_im, 0.0);
    }

    #[test]
    fn hours_of_life_floors_elapsed_time(offset_minutes in 0i64..(30 * 24 * 60)) {
        let birth = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap();
        let sample = birth + Duration::minutes(offset_minutes);

        let hours = compute_hours_of_life(
            "2024-01-01",
            "08:00",
            &sample.format("%Y-%m-%dT%H:%M").to_string(),
        );
        prop_assert!(hours >= 0);
        prop_assert_eq!(hours, offset_minutes / 60);
    }

    #[test]
    fn hours_of_life_zero_when_any_input_empty(which in 0usize..3) {
        let mut inputs = ["2024-01-01", "08:00", "2024-01-05T08:00"];
        inputs[which] = "";
        prop_assert_eq!(compute_hours_of_life(inputs[0], inputs[1], inputs[2]), 0);
    }
}
