//! Descriptive statistics over already-cleaned samples (no NaN).

/// Sort a sample ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// `p`-quantile of an ascending sample, interpolating linearly between the
/// two closest ranks (`h = (n - 1) * p`). Empty input yields NaN.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    lerp(sorted[lo], sorted[hi], h - lo as f64)
}

/// Interpolate from the nearer endpoint, the same rounding numpy's
/// `linear` method uses.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Arithmetic mean. Empty input yields NaN.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample standard deviation (`n - 1` denominator).
/// Fewer than two values yield NaN.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let mu = mean(values);
    let ss: f64 = values.iter().map(|x| (x - mu).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}
