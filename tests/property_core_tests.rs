use barchart_rs::core::{
    GutterWidthUpdate, GutterWidths, analyze, generate_ticks, size_in_percentages,
    updated_gutter_width,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn analyzer_sign_flags_match_elementwise_checks(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..64)
    ) {
        let analysis = analyze(&values);
        prop_assert_eq!(analysis.has_positive, values.iter().any(|&v| v > 0.0));
        prop_assert_eq!(analysis.has_negative, values.iter().any(|&v| v < 0.0));
        if !values.is_empty() {
            prop_assert_eq!(analysis.all_positive, values.iter().all(|&v| v >= 0.0));
            prop_assert_eq!(analysis.all_negative, values.iter().all(|&v| v <= 0.0));
        }
    }

    #[test]
    fn mixed_sign_datasets_get_symmetric_bounds(
        positives in prop::collection::vec(0.001f64..1_000_000.0, 1..32),
        negatives in prop::collection::vec(-1_000_000.0f64..-0.001, 1..32)
    ) {
        let mut values = positives;
        values.extend(negatives);
        let analysis = analyze(&values);

        prop_assert_eq!(analysis.axis_min, -analysis.axis_max);
        let magnitude = analysis.min.abs().max(analysis.max.abs());
        prop_assert_eq!(analysis.axis_max, magnitude);
    }

    #[test]
    fn ticks_are_ascending_with_constant_increment(
        min in -1_000_000i64..1_000_000,
        span in 1i64..1_000_000,
        num_of_ticks in 2usize..12
    ) {
        let (min, max) = (min as f64, (min + span) as f64);
        let ticks = generate_ticks(min, max, num_of_ticks, 0.5);
        prop_assert_eq!(ticks.len(), num_of_ticks);

        let increment = ticks[1] - ticks[0];
        prop_assert!(increment > 0.0);
        for pair in ticks.windows(2) {
            let step = pair[1] - pair[0];
            prop_assert!((step - increment).abs() <= increment * 1e-9);
        }
    }

    #[test]
    fn straddling_ranges_center_zero_on_the_middle_tick(
        min in -1_000_000.0f64..-0.001,
        max in 0.001f64..1_000_000.0
    ) {
        let ticks = generate_ticks(min, max, 5, 0.5);
        prop_assert_eq!(ticks[2], 0.0);
    }

    #[test]
    fn percentage_of_range_endpoints_is_zero_and_one_hundred(
        min in 0.0f64..1_000.0,
        span in 0.001f64..1_000.0
    ) {
        let max = min + span;
        prop_assert!(size_in_percentages(min, min, max).abs() <= 1e-9);
        prop_assert!((size_in_percentages(max, min, max) - 100.0).abs() <= 1e-9);
    }

    #[test]
    fn gutter_width_percentage_round_trips(
        target in 0.0f64..=100.0
    ) {
        let widths = GutterWidths::default();
        let update = GutterWidthUpdate {
            current_percentage: widths.width_percentage(),
            min_width: widths.min,
            max_width: widths.max,
            width_percentage: target,
        };

        if let Some(width) = updated_gutter_width(update) {
            let applied = GutterWidths { width, ..widths };
            // width_percentage rounds to whole percent.
            prop_assert!((applied.width_percentage() - target).abs() <= 0.5);
        } else {
            prop_assert_eq!(widths.width_percentage(), target);
        }
    }
}
