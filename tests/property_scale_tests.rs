use proptest::prelude::*;
use scatter_rs::core::{Domain, LinearScale, ScreenPoint, tick_values};
use scatter_rs::interaction::{ScaleExtent, ViewTransform};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_min in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        range_end in 1.0f64..4_096.0
    ) {
        let domain = Domain::new(domain_min, domain_min + domain_span).expect("domain");
        let scale = LinearScale::new(domain, 0.0, range_end).expect("scale");
        let value = domain_min + value_factor * domain_span;

        let px = scale.domain_to_pixel(value);
        let recovered = scale.pixel_to_domain(px);
        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn inverted_range_maps_larger_values_higher(
        low in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        height in 10.0f64..2_000.0
    ) {
        let domain = Domain::new(low, low + span).expect("domain");
        let scale = LinearScale::new(domain, height, 0.0).expect("scale");
        prop_assert!(scale.domain_to_pixel(low + span) < scale.domain_to_pixel(low));
    }

    #[test]
    fn ticks_fall_inside_domain(
        start in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        count in 1usize..12
    ) {
        let stop = start + span;
        let tolerance = 1e-9 * (start.abs() + span);
        for tick in tick_values(start, stop, count) {
            prop_assert!(tick >= start - tolerance && tick <= stop + tolerance);
        }
    }

    #[test]
    fn transform_invert_undoes_apply(
        k in 0.5f64..32.0,
        tx in -1_000.0f64..1_000.0,
        ty in -1_000.0f64..1_000.0,
        px in -2_000.0f64..2_000.0,
        py in -2_000.0f64..2_000.0
    ) {
        let transform = ViewTransform::new(k, tx, ty);
        let point = ScreenPoint::new(px, py);
        let back = transform.invert(transform.apply(point));
        prop_assert!((back.x - px).abs() <= 1e-7);
        prop_assert!((back.y - py).abs() <= 1e-7);
    }

    #[test]
    fn zoom_around_anchor_keeps_anchor_fixed(
        factor in 0.1f64..10.0,
        ax in 0.0f64..800.0,
        ay in 0.0f64..600.0
    ) {
        let extent = ScaleExtent::default();
        let anchor = ScreenPoint::new(ax, ay);
        let before = ViewTransform::IDENTITY.invert(anchor);
        let zoomed = ViewTransform::IDENTITY.zoomed_at(factor, anchor, extent);
        let after = zoomed.invert(anchor);
        prop_assert!((before.x - after.x).abs() <= 1e-7);
        prop_assert!((before.y - after.y).abs() <= 1e-7);
        prop_assert!(zoomed.k >= extent.min && zoomed.k <= extent.max);
    }
}
