use ecoscan::footprint::{
    compute_footprint, CarbonTable, FootprintEngine, ImpactLevel, RecommendationTier, JEANS_TIP,
    T_SHIRT_TIP,
};

#[test]
fn totals_are_exact_table_sums() {
    let table = CarbonTable::standard();
    let labels = ["Coat", "Jacket", "Socks", "Tank Top", "Blazer"];
    let analysis = compute_footprint(&labels);

    let expected: u32 = labels.iter().map(|label| table.carbon_for(label)).sum();
    assert_eq!(analysis.total_carbon, expected);
    assert_eq!(analysis.total_carbon, 42);
    assert_eq!(
        analysis.total_carbon,
        analysis.items.iter().map(|item| item.carbon).sum::<u32>()
    );
    assert_eq!(analysis.eco_points, 8);
    assert_eq!(analysis.sustainability_score, 16);
}

#[test]
fn items_keep_input_order_and_duplicates() {
    let analysis = compute_footprint(&["Jeans", "Socks", "Jeans"]);
    let labels: Vec<&str> = analysis
        .items
        .iter()
        .map(|item| item.label.as_str())
        .collect();

    assert_eq!(labels, vec!["Jeans", "Socks", "Jeans"]);
    assert_eq!(analysis.total_carbon, 22);
    assert_eq!(analysis.recommendations.len(), 4);
    assert_eq!(analysis.recommendations[3], JEANS_TIP);
}

#[test]
fn eco_points_floor_at_zero_beyond_budget() {
    let analysis = compute_footprint(&["Coat", "Coat", "Coat", "Coat"]);
    assert_eq!(analysis.total_carbon, 60);
    assert_eq!(analysis.eco_points, 0);
    assert_eq!(analysis.sustainability_score, 0);
    assert_eq!(analysis.impact_level, ImpactLevel::VeryHigh);
}

#[test]
fn aggregate_impact_uses_item_thresholds() {
    let cases: [(&[&str], ImpactLevel); 4] = [
        (&["Socks"], ImpactLevel::Low),
        (&["T-shirt", "Shorts"], ImpactLevel::Medium),
        (&["Jeans", "Shirt"], ImpactLevel::High),
        (&["Coat", "Jacket"], ImpactLevel::VeryHigh),
    ];

    for (labels, expected) in cases {
        assert_eq!(
            compute_footprint(labels).impact_level,
            expected,
            "labels {labels:?}"
        );
    }
}

#[test]
fn boundary_totals_classify_inclusively() {
    // Skirt 6, Shorts 3, Socks 2
    let cases: [(&[&str], u32, ImpactLevel); 6] = [
        (&["T-shirt"], 5, ImpactLevel::Low),
        (&["Skirt"], 6, ImpactLevel::Medium),
        (&["Jeans"], 10, ImpactLevel::Medium),
        (&["Skirt", "Socks", "Shorts"], 11, ImpactLevel::High),
        (&["Coat"], 15, ImpactLevel::High),
        (&["Coat", "Socks"], 17, ImpactLevel::VeryHigh),
    ];

    for (labels, total, expected) in cases {
        let analysis = compute_footprint(labels);
        assert_eq!(analysis.total_carbon, total, "labels {labels:?}");
        assert_eq!(analysis.impact_level, expected, "labels {labels:?}");
    }
}

#[test]
fn unknown_label_uses_default_carbon() {
    let analysis = compute_footprint(&["Unknown-Item"]);
    assert_eq!(analysis.total_carbon, 5);
    assert_eq!(analysis.items[0].carbon, 5);
    assert_eq!(analysis.items[0].impact, ImpactLevel::Low);
    assert_eq!(analysis.impact_level, ImpactLevel::Low);
}

#[test]
fn recommendation_tiers_follow_total() {
    // Coat + Jacket = 27, Jeans + Shirt = 14, T-shirt + Shorts = 8
    let reduce = compute_footprint(&["Coat", "Jacket"]);
    assert_eq!(
        reduce.recommendations,
        RecommendationTier::Reduce.messages().to_vec()
    );

    let good = compute_footprint(&["Jeans", "Shirt"]);
    assert_eq!(
        &good.recommendations[..3],
        RecommendationTier::GoodChoice.messages()
    );
    assert_eq!(good.recommendations[3], JEANS_TIP);
    assert_eq!(good.recommendations.len(), 4);

    let excellent = compute_footprint(&["Shorts", "T-shirt"]);
    assert_eq!(
        &excellent.recommendations[..3],
        RecommendationTier::Excellent.messages()
    );
    assert_eq!(excellent.recommendations[3], T_SHIRT_TIP);
    assert_eq!(excellent.recommendations.len(), 4);
}

#[test]
fn scoring_is_deterministic() {
    let engine = FootprintEngine;
    let labels = vec!["Hoodie".to_string(), "Kilt".to_string(), "T-shirt".to_string()];

    let first = engine.analyze(&labels);
    let second = engine.analyze(&labels);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}
