use audit_visuals::charts::{FunnelChart, FunnelStage, bar_height_to_rank, rank_to_bar_height};
use audit_visuals::{ChartKind, ChartRenderer, Severity};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn rank_inversion_round_trip_property(max_rank in 1u32..10_000, rank_factor in 0.0f64..1.0) {
        let rank = 1 + (rank_factor * f64::from(max_rank - 1)).floor() as u32;
        let height = rank_to_bar_height(rank, max_rank);

        prop_assert!((1..=max_rank).contains(&height));
        prop_assert_eq!(bar_height_to_rank(height, max_rank), rank);
    }

    #[test]
    fn better_ranks_are_never_shorter_property(max_rank in 2u32..1_000, rank in 1u32..999) {
        let rank = rank.min(max_rank - 1);
        prop_assert!(rank_to_bar_height(rank, max_rank) > rank_to_bar_height(rank + 1, max_rank));
    }

    #[test]
    fn score_severity_is_monotonic_property(low in 0.0f64..100.0, delta in 0.0f64..100.0) {
        let high = (low + delta).min(100.0);
        let order = |severity: Severity| match severity {
            Severity::Bad => 0,
            Severity::Warn => 1,
            Severity::Good => 2,
        };
        prop_assert!(order(Severity::for_score(high)) >= order(Severity::for_score(low)));
    }

    #[test]
    fn gauge_sweep_tracks_score_property(score in 0.0f64..=100.0) {
        let frame = ChartRenderer::default()
            .build_frame(ChartKind::ScoreGauge, &json!({ "score": score, "title": "Score" }))
            .expect("frame");

        let track = frame.arcs[0];
        prop_assert!((track.sweep() - std::f64::consts::PI).abs() < 1e-9);
        if let Some(fill) = frame.arcs.get(1) {
            let expected = score / 100.0 * std::f64::consts::PI;
            prop_assert!((fill.sweep() - expected).abs() < 1e-9);
            prop_assert!(fill.sweep() <= track.sweep() + 1e-12);
        } else {
            prop_assert!(score < 1e-9);
        }
    }

    #[test]
    fn funnel_widths_stay_positive_and_shrink_property(count in 1usize..40) {
        let chart = FunnelChart {
            stages: (0..count)
                .map(|index| FunnelStage { label: format!("Stage {index}"), value: None })
                .collect(),
            title: None,
        };

        let last = chart.stage_width(count - 1);
        prop_assert!(last >= 1.5 - 1e-9);
        for index in 1..count {
            prop_assert!(chart.stage_width(index) < chart.stage_width(index - 1));
        }
    }

    #[test]
    fn heat_map_frames_are_valid_for_any_grid_property(
        rows in 1usize..8,
        columns in 1usize..8,
        seed in proptest::collection::vec(proptest::option::of(1u32..60), 64)
    ) {
        let grid: Vec<Vec<Option<u32>>> = (0..rows)
            .map(|row| (0..columns).map(|column| seed[row * 8 + column]).collect())
            .collect();
        let payload = json!({ "grid": grid, "title": "Grid", "center_label": "Here" });

        let frame = ChartRenderer::default()
            .build_frame(ChartKind::HeatMap, &payload)
            .expect("frame");
        prop_assert_eq!(frame.rects.len(), rows * columns + 4);
        prop_assert!(frame.validate().is_ok());
    }
}
