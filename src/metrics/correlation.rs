use serde::Serialize;

use super::MetricError;

/// Square, symmetric matrix of pairwise Pearson coefficients. A `None` cell
/// means the coefficient is undefined (a zero-variance series), which is not
/// the same thing as a correlation of zero.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

/// Pairwise price correlation across assets.
///
/// Series are aligned on positional index. All callers fetch with the same
/// start/end/interval so lengths normally coincide; ragged inputs are
/// truncated to the shortest series rather than rejected. With fewer than
/// two aligned points every coefficient is undefined.
pub fn correlation_matrix(series: &[(String, Vec<f64>)]) -> Result<CorrelationMatrix, MetricError> {
    if series.is_empty() {
        return Err(MetricError::EmptySeries);
    }

    let len = series.iter().map(|(_, s)| s.len()).min().unwrap_or(0);
    let n = series.len();
    let mut cells = vec![vec![None; n]; n];

    for i in 0..n {
        let a = &series[i].1[..len];
        cells[i][i] = if has_variance(a) { Some(1.0) } else { None };
        for j in (i + 1)..n {
            let b = &series[j].1[..len];
            let c = pearson(a, b);
            cells[i][j] = c;
            cells[j][i] = c;
        }
    }

    Ok(CorrelationMatrix {
        labels: series.iter().map(|(name, _)| name.clone()).collect(),
        cells,
    })
}

/// Exact constant-series check; immune to float accumulation noise in the
/// variance sum.
fn has_variance(xs: &[f64]) -> bool {
    xs.len() >= 2 && xs.iter().any(|&x| x != xs[0])
}

fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() < 2 || !has_variance(a) || !has_variance(b) {
        return None;
    }

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }
    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, xs: &[f64]) -> (String, Vec<f64>) {
        (name.to_string(), xs.to_vec())
    }

    #[test]
    fn identical_series_correlate_to_one() {
        let m = correlation_matrix(&[
            named("a", &[1.0, 2.0, 3.0, 4.0]),
            named("b", &[1.0, 2.0, 3.0, 4.0]),
        ])
        .unwrap();
        assert!((m.cells[0][1].unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mirrored_series_correlate_to_minus_one() {
        // b mirrors a around its mean.
        let m = correlation_matrix(&[
            named("a", &[1.0, 2.0, 3.0, 4.0]),
            named("b", &[4.0, 3.0, 2.0, 1.0]),
        ])
        .unwrap();
        assert!((m.cells[0][1].unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let m = correlation_matrix(&[
            named("a", &[1.0, 5.0, 2.0, 8.0]),
            named("b", &[2.0, 1.0, 7.0, 3.0]),
            named("c", &[9.0, 4.0, 4.0, 1.0]),
        ])
        .unwrap();
        for i in 0..3 {
            assert_eq!(m.cells[i][i], Some(1.0));
            for j in 0..3 {
                assert_eq!(m.cells[i][j], m.cells[j][i]);
            }
        }
    }

    #[test]
    fn zero_variance_series_yields_undefined_not_zero() {
        let m = correlation_matrix(&[
            named("flat", &[5.0, 5.0, 5.0]),
            named("moves", &[1.0, 2.0, 3.0]),
        ])
        .unwrap();
        assert_eq!(m.cells[0][0], None);
        assert_eq!(m.cells[0][1], None);
        assert_eq!(m.cells[1][1], Some(1.0));
    }

    #[test]
    fn ragged_series_are_truncated_to_shortest() {
        let m = correlation_matrix(&[
            named("long", &[1.0, 2.0, 3.0, 100.0, -50.0]),
            named("short", &[1.0, 2.0, 3.0]),
        ])
        .unwrap();
        // Over the first three points the series are identical.
        assert!((m.cells[0][1].unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn no_series_is_an_error() {
        assert!(correlation_matrix(&[]).is_err());
    }
}
