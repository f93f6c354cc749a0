/// Relative-strength-style momentum oscillator, bounded [0, 100].
///
/// For each index, gains and losses are the rolling means of positive and
/// negative one-step deltas over the trailing `window` samples. Output has
/// the same length as the input. The first `window` entries are `None`
/// (insufficient history). When the window saw only gains the loss mean is
/// zero and the oscillator takes its limit value of exactly 100; a window
/// with neither gains nor losses leaves the oscillator undefined.
pub fn momentum(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; prices.len()];
    if window == 0 {
        return out;
    }

    for i in window..prices.len() {
        let mut gain = 0.0;
        let mut loss = 0.0;
        for j in (i + 1 - window)..=i {
            let delta = prices[j] - prices[j - 1];
            if delta > 0.0 {
                gain += delta;
            } else {
                loss -= delta;
            }
        }
        let gain = gain / window as f64;
        let loss = loss / window as f64;

        out[i] = if loss == 0.0 {
            if gain > 0.0 { Some(100.0) } else { None }
        } else {
            let rs = gain / loss;
            Some(100.0 - 100.0 / (1.0 + rs))
        };
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_length_matches_input_and_head_is_undefined() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + (i % 7) as f64).collect();
        let m = momentum(&prices, 14);
        assert_eq!(m.len(), prices.len());
        assert!(m[..14].iter().all(|v| v.is_none()));
        assert!(m[14].is_some());
    }

    #[test]
    fn window_two_scenario() {
        let m = momentum(&[1.0, 2.0, 3.0, 2.0, 1.0], 2);
        assert_eq!(m[0], None);
        assert_eq!(m[1], None);
        // Two gains, zero loss: limit value, exactly 100.
        assert_eq!(m[2], Some(100.0));
        // One gain of 1, one loss of 1: rs = 1, momentum = 50.
        assert_eq!(m[3], Some(50.0));
        // Two losses, zero gain: rs = 0, momentum = 0.
        assert_eq!(m[4], Some(0.0));
    }

    #[test]
    fn flat_window_is_undefined() {
        let m = momentum(&[5.0, 5.0, 5.0, 5.0], 2);
        assert_eq!(m, vec![None, None, None, None]);
    }

    #[test]
    fn stays_within_bounds() {
        let prices = [10.0, 12.0, 9.0, 14.0, 13.0, 13.5, 8.0, 8.1];
        for v in momentum(&prices, 3).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&v));
        }
    }
}
