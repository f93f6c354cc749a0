use coinscope::metrics::{
    MemberOutcome, correlation_matrix, group_perf::aggregate_group, momentum,
    normalized_performance, top_movers, volatility,
};
use coinscope::model::{Asset, HistoryPoint};

// ── Fixtures ────────────────────────────────────────────────────────

fn asset(name: &str, change: f64, volume: f64) -> Asset {
    Asset {
        id: name.to_lowercase(),
        name: name.to_string(),
        symbol: name.to_uppercase(),
        price_usd: 1.0,
        change_percent_24h: change,
        volume_usd_24h: volume,
        market_cap_usd: 1_000_000.0,
        supply: 0.0,
        max_supply: None,
        vwap_24h: None,
    }
}

fn series(prices: &[f64]) -> Vec<HistoryPoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| HistoryPoint {
            time_ms: 1_700_000_000_000 + i as i64 * 3_600_000,
            price_usd: p,
        })
        .collect()
}

// ── Top movers ──────────────────────────────────────────────────────

#[test]
fn ten_asset_fixture_ranks_three_gainers_strictly_descending() {
    let changes = [4.2, -1.0, 9.9, 0.0, 7.7, -8.3, 2.5, 9.9, -0.4, 1.1];
    let assets: Vec<Asset> = changes
        .iter()
        .enumerate()
        .map(|(i, &c)| asset(&format!("A{i}"), c, i as f64 * 100.0))
        .collect();

    let movers = top_movers(&assets, 3);
    assert_eq!(movers.gainers.len(), 3);
    assert!(movers.gainers[0].value >= movers.gainers[1].value);
    assert!(movers.gainers[1].value >= movers.gainers[2].value);
    // The two 9.9s tie; stable sort keeps A2 ahead of A7.
    assert_eq!(movers.gainers[0].name, "A2");
    assert_eq!(movers.gainers[1].name, "A7");

    assert_eq!(movers.losers[0].value, -8.3);
    assert_eq!(movers.volume_leaders[0].name, "A9");
}

#[test]
fn two_of_three_scenario() {
    let assets = vec![asset("A", 5.0, 0.0), asset("B", -3.0, 0.0), asset("C", 10.0, 0.0)];
    let movers = top_movers(&assets, 2);

    assert_eq!(movers.gainers[0].name, "C");
    assert_eq!(movers.gainers[0].value, 10.0);
    assert_eq!(movers.gainers[1].name, "A");
    assert_eq!(movers.gainers[1].value, 5.0);

    assert_eq!(movers.losers[0].name, "B");
    assert_eq!(movers.losers[0].value, -3.0);
    assert_eq!(movers.losers[1].name, "A");
    assert_eq!(movers.losers[1].value, 5.0);
}

// ── Volatility and performance ──────────────────────────────────────

#[test]
fn constant_series_is_perfectly_calm() {
    assert_eq!(volatility(&series(&[7.0; 24])).unwrap(), 0.0);
}

#[test]
fn normalized_performance_scenario() {
    let perf = normalized_performance(&series(&[100.0, 110.0, 99.0])).unwrap();
    assert_eq!(perf, vec![0.0, 10.0, -1.0]);
}

// ── Correlation ─────────────────────────────────────────────────────

#[test]
fn identical_and_mirrored_series() {
    let a = vec![10.0, 12.0, 11.0, 15.0, 13.0];
    let mean = a.iter().sum::<f64>() / a.len() as f64;
    let mirrored: Vec<f64> = a.iter().map(|&x| 2.0 * mean - x).collect();

    let m = correlation_matrix(&[
        ("a".to_string(), a.clone()),
        ("same".to_string(), a),
        ("mirror".to_string(), mirrored),
    ])
    .unwrap();

    assert!((m.cells[0][1].unwrap() - 1.0).abs() < 1e-12);
    assert!((m.cells[0][2].unwrap() + 1.0).abs() < 1e-12);
    for i in 0..3 {
        assert_eq!(m.cells[i][i], Some(1.0));
        for j in 0..3 {
            assert_eq!(m.cells[i][j], m.cells[j][i]);
        }
    }
}

// ── Momentum ────────────────────────────────────────────────────────

#[test]
fn momentum_window_two_scenario() {
    let m = momentum(&[1.0, 2.0, 3.0, 2.0, 1.0], 2);
    assert_eq!(m.len(), 5);
    assert_eq!(&m[..2], &[None, None]);
    assert_eq!(m[2], Some(100.0)); // all gains: limit value, not an error
    assert_eq!(m[3], Some(50.0));
    assert_eq!(m[4], Some(0.0));
}

// ── Group aggregation ───────────────────────────────────────────────

#[test]
fn group_average_skips_failed_and_misaligned_members() {
    let grid = series(&[100.0, 120.0, 90.0]);
    let aligned = series(&[50.0, 55.0, 50.0]);
    let mut shifted = series(&[10.0, 11.0, 12.0]);
    shifted[2].time_ms += 1; // same length, drifted bucket

    let g = aggregate_group(
        "Layer 1",
        vec![
            ("one".to_string(), Ok(grid)),
            ("two".to_string(), Ok(aligned)),
            ("down".to_string(), Err("fetch failed: 502".to_string())),
            ("drift".to_string(), Ok(shifted)),
        ],
    );

    assert_eq!(g.included_count(), 2);
    // one: [0, 20, -10], two: [0, 10, 0] -> [0, 15, -5]
    assert_eq!(g.average, vec![0.0, 15.0, -5.0]);

    let skipped: Vec<&str> = g
        .members
        .iter()
        .filter(|m| matches!(m, MemberOutcome::Skipped { .. }))
        .map(|m| m.id())
        .collect();
    assert_eq!(skipped, vec!["down", "drift"]);
}
