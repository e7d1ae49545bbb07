use proptest::prelude::*;
use scatter_rs::api::{ChartConfig, Emphasis};
use scatter_rs::core::{Attribute, Axis, Dataset, Record};
use scatter_rs::render::NullRenderer;
use scatter_rs::ScatterChart;

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        1.0f64..40.0,
        20.0f64..60.0,
        20_000.0f64..120_000.0,
        1.0f64..30.0,
        5.0f64..35.0,
        15.0f64..45.0,
    )
        .prop_map(|(poverty, age, income, healthcare, smokes, obesity)| Record {
            state: "Somewhere".to_owned(),
            abbr: "SW".to_owned(),
            poverty,
            age,
            income,
            healthcare,
            smokes,
            obesity,
        })
}

fn click_strategy() -> impl Strategy<Value = (usize, f64)> {
    (0usize..Attribute::ALL.len(), 0.0f64..1500.0)
}

proptest! {
    #[test]
    fn random_click_sequences_keep_one_active_control_per_axis(
        records in prop::collection::vec(record_strategy(), 1..12),
        clicks in prop::collection::vec(click_strategy(), 0..20),
    ) {
        let dataset = Dataset::new(records).expect("non-empty");
        let mut chart = ScatterChart::new(
            NullRenderer::default(),
            dataset,
            ChartConfig::default(),
        )
        .expect("chart");

        let mut now = 0.0;
        for (choice, gap) in clicks {
            now += gap;
            let attribute = Attribute::ALL[choice];
            let was_active = chart.axis_state().active(attribute.axis()) == attribute;
            let changed = chart.click_label(attribute.key(), now).expect("known control");
            prop_assert_eq!(changed, !was_active);
            prop_assert_eq!(chart.axis_state().active(attribute.axis()), attribute);

            for axis in [Axis::X, Axis::Y] {
                let active: Vec<_> = Attribute::candidates(axis)
                    .into_iter()
                    .filter(|candidate| chart.emphasis(*candidate) == Some(Emphasis::Active))
                    .collect();
                prop_assert_eq!(active, vec![chart.axis_state().active(axis)]);
            }

            let binding = chart.scene().markers.tooltip().expect("tooltip bound");
            prop_assert_eq!(binding.x_attribute, chart.axis_state().x());
            prop_assert_eq!(binding.y_attribute, chart.axis_state().y());
        }

        let settled = now + chart.config().transition_duration_ms;
        prop_assert!(!chart.is_transitioning(settled));
        for (index, record) in chart.dataset().records().iter().enumerate() {
            let expected = chart.state().projection().project(record);
            let marker = chart.marker_position(index, settled).expect("marker");
            let label = chart.label_position(index, settled).expect("label");
            prop_assert!((marker.0 - expected.0).abs() < 1e-6);
            prop_assert!((marker.1 - expected.1).abs() < 1e-6);
            prop_assert_eq!(marker, label);
        }
    }
}
