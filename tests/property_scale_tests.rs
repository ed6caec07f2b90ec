use linechart_core::core::{LinearScale, LogScale, MIN_POSITIVE_VALUE, Scale, ScaleConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn log_scale_round_trip_property(
        low_exp in -30.0f64..30.0,
        decades in 0.5f64..20.0,
        value_factor in 0.0f64..1.0
    ) {
        let low = 10_f64.powf(low_exp);
        let high = 10_f64.powf(low_exp + decades);
        let value = 10_f64.powf(low_exp + decades * value_factor);

        let scale = LogScale::new((low, high), (0.0, 2048.0));
        let px = scale.scale(value);
        prop_assert!(px.is_finite());

        let recovered = scale.invert(px);
        prop_assert!(((recovered - value) / value).abs() <= 1e-9);
    }

    #[test]
    fn log_scale_non_positive_is_always_nan(
        value in -1e12f64..=0.0,
        low in 1e-6f64..1.0,
        high in 2.0f64..1e6
    ) {
        let scale = LogScale::new((low, high), (0.0, 1.0));
        prop_assert!(scale.scale(value).is_nan());
    }

    #[test]
    fn log_scale_effective_domain_is_positive(
        low in -1e9f64..1e9,
        high in 1.0f64..1e9
    ) {
        let mut scale = LogScale::default();
        scale.set_domain((low, high));
        prop_assert_eq!(scale.domain(), (low, high));
        prop_assert!(scale.effective_domain().0 >= MIN_POSITIVE_VALUE);
        prop_assert_eq!(scale.effective_domain().1, high);
    }

    #[test]
    fn log_nice_domain_contains_extent(
        values in proptest::collection::vec(1e-9f64..1e9, 1..64),
        pad in 0.0f64..1.0
    ) {
        let scale = LogScale::with_config(ScaleConfig::default().with_pad_proportion(pad))
            .expect("scale");
        let (min, max) = scale.extent_of_values(&values).expect("extent");
        let (low, high) = scale.nice_domain((min, max), 10);

        prop_assert!(low > 0.0);
        prop_assert!(low <= min * (1.0 + 1e-9));
        prop_assert!(high >= max * (1.0 - 1e-9));
    }

    #[test]
    fn trimmed_extent_is_within_untrimmed_extent(
        values in proptest::collection::vec(-1e6f64..1e6, 1..128)
    ) {
        let plain = LogScale::default();
        let trimmed = LogScale::with_config(ScaleConfig::default().with_ignore_outlier(true))
            .expect("scale");

        let full = plain.extent_of_values(&values);
        let inner = trimmed.extent_of_values(&values);
        if full.is_none() {
            prop_assert!(inner.is_none());
            prop_assert!(values.iter().all(|v| *v <= 0.0));
        }
        if let (Some(full), Some(inner)) = (full, inner) {
            prop_assert!(inner.0 >= full.0);
            prop_assert!(inner.1 <= full.1);
            prop_assert!(inner.0 <= inner.1);
        }
    }

    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0));
        let px = scale.scale(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn ticks_lie_inside_domain(
        low_exp in -10.0f64..10.0,
        decades in 0.1f64..40.0
    ) {
        let low = 10_f64.powf(low_exp);
        let high = 10_f64.powf(low_exp + decades);
        let scale = LogScale::new((low, high), (0.0, 1.0));

        for tick in scale.ticks() {
            prop_assert!(tick.is_finite());
            prop_assert!(tick >= low * (1.0 - 1e-9));
            prop_assert!(tick <= high * (1.0 + 1e-9));
        }
    }
}
