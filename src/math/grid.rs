//! Linear grid generation and discrete gradients for threshold sweeps

/// Generate `samples` evenly spaced values from 0 to `max` inclusive
///
/// A degenerate range (`max` = 0, as happens when every point coincides)
/// yields a grid of zeros, which downstream sweeps handle without
/// special-casing. Callers validate `samples` ≥ 2 before reaching here.
pub fn linear_grid(max: f64, samples: usize) -> Vec<f64> {
    let step = max / (samples.saturating_sub(1).max(1)) as f64;
    (0..samples).map(|k| k as f64 * step).collect()
}

/// Discrete gradient of uniformly spaced samples
///
/// Central differences in the interior, one-sided differences at the two
/// ends. `spacing` must be positive; a degenerate spacing of zero is mapped
/// to 1.0 so the argmax of the result is still well defined.
pub fn discrete_gradient(values: &[f64], spacing: f64) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let h = if spacing > 0.0 { spacing } else { 1.0 };

    (0..n)
        .map(|k| {
            let (ahead, behind, span) = if k == 0 {
                (values.get(1), values.first(), h)
            } else if k == n - 1 {
                (values.get(n - 1), values.get(n - 2), h)
            } else {
                (values.get(k + 1), values.get(k - 1), 2.0 * h)
            };

            match (ahead, behind) {
                (Some(a), Some(b)) => (a - b) / span,
                _ => 0.0,
            }
        })
        .collect()
}

/// Index of the first maximum value in a sequence
///
/// Ties break toward the lowest index, matching the sweep convention of
/// taking the first threshold at which an extremum occurs. Returns `None`
/// for an empty sequence.
pub fn first_argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (k, &v) in values.iter().enumerate() {
        match best {
            Some((_, current)) if v <= current => {}
            _ => best = Some((k, v)),
        }
    }
    best.map(|(k, _)| k)
}
