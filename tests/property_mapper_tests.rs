use name_trends::core::{CoordinateMapper, DEFAULT_MAX_RANK};
use proptest::prelude::*;

proptest! {
    #[test]
    fn x_is_increasing_and_inside_margins(
        width in 100.0f64..4_000.0,
        margin in 0.0f64..40.0,
        year_count in 2usize..40
    ) {
        let mapper = CoordinateMapper::new(margin, year_count, DEFAULT_MAX_RANK);

        let mut previous = f64::NEG_INFINITY;
        for index in 0..year_count {
            let x = mapper.x_for_year_index(width, index);
            prop_assert!(x > previous);
            prop_assert!(x >= margin);
            prop_assert!(x <= width - margin);
            previous = x;
        }
    }

    #[test]
    fn y_is_always_inside_margins(
        height in 100.0f64..4_000.0,
        margin in 0.0f64..40.0,
        rank in -10_000.0f64..10_000.0
    ) {
        let mapper = CoordinateMapper::new(margin, 12, DEFAULT_MAX_RANK);
        let y = mapper.y_for_rank(height, rank);

        prop_assert!(y >= margin);
        prop_assert!(y <= height - margin);
    }

    #[test]
    fn y_never_decreases_with_rank(
        first in 1u32..2_000,
        second in 1u32..2_000
    ) {
        let mapper = CoordinateMapper::new(20.0, 12, DEFAULT_MAX_RANK);
        let (better, worse) = (first.min(second), first.max(second));

        prop_assert!(
            mapper.y_for_rank(600.0, f64::from(better)) <= mapper.y_for_rank(600.0, f64::from(worse))
        );
    }
}
