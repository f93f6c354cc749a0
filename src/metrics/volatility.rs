use crate::model::HistoryPoint;

use super::MetricError;

/// Population standard deviation of bucket-over-bucket percentage returns,
/// expressed as a percentage. Needs at least two points; a single point has
/// no return series and the statistic is undefined.
pub fn volatility(points: &[HistoryPoint]) -> Result<f64, MetricError> {
    if points.len() < 2 {
        return Err(MetricError::InsufficientHistory {
            needed: 2,
            got: points.len(),
        });
    }

    let returns: Vec<f64> = points
        .windows(2)
        .map(|w| (w[1].price_usd - w[0].price_usd) / w[0].price_usd)
        .collect();

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    Ok(variance.sqrt() * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<HistoryPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| HistoryPoint {
                time_ms: i as i64 * 3_600_000,
                price_usd: p,
            })
            .collect()
    }

    #[test]
    fn constant_series_has_zero_volatility() {
        let v = volatility(&series(&[42.0, 42.0, 42.0, 42.0])).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn single_point_is_undefined() {
        let err = volatility(&series(&[100.0])).unwrap_err();
        assert!(matches!(
            err,
            MetricError::InsufficientHistory { needed: 2, got: 1 }
        ));
    }

    #[test]
    fn empty_series_is_undefined() {
        assert!(volatility(&[]).is_err());
    }

    #[test]
    fn matches_population_stddev_of_returns() {
        // Returns: +10%, -10%. Mean 0, population variance 0.01, std 0.1 -> 10%.
        let v = volatility(&series(&[100.0, 110.0, 99.0])).unwrap();
        assert!((v - 10.0).abs() < 1e-9);
    }
}
