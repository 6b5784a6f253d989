use name_trends::core::{NameLookup, NameSeries};
use name_trends::render::RecordingSink;
use name_trends::{TrendChart, TrendChartConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn series_primitives_scale_with_selection(
        ranks in proptest::collection::vec(proptest::option::of(1u32..3_000), 12),
        selected in 0usize..6
    ) {
        let chart = TrendChart::new(TrendChartConfig::default()).expect("chart");
        let series = NameSeries::from_pairs(
            ranks
                .iter()
                .enumerate()
                .filter_map(|(i, rank)| rank.map(|rank| (1900 + 10 * i as i32, rank))),
        );
        let lookup: NameLookup = (0..selected)
            .map(|i| (format!("Name{i}"), series.clone()))
            .collect();
        let names: Vec<String> = lookup.keys().cloned().collect();

        let mut sink = RecordingSink::default();
        chart.draw_series(&mut sink, &lookup, &names).expect("draw");

        prop_assert_eq!(sink.last_line_count, 15 + selected * 11);
        prop_assert_eq!(sink.last_text_count, 12 + selected * 12);

        let unranked = ranks.iter().filter(|rank| rank.is_none()).count();
        let placeholder_labels = sink
            .frame()
            .texts()
            .filter(|text| text.text.ends_with(" *"))
            .count();
        prop_assert_eq!(placeholder_labels, unranked * selected);

        for line in sink.frame().lines() {
            prop_assert!(line.y1 >= 0.0 && line.y1 <= 600.0);
            prop_assert!(line.y2 >= 0.0 && line.y2 <= 600.0);
        }
    }
}
