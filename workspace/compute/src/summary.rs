use common::{BoxSummary, HistogramBin};

/// Bin count of the production histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Equal-width bins spanning the value range.
///
/// When every value is the same the bins span one unit centred on that value.
/// Each bin is `[start, end)` except the last, which also holds the maximum.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut low, mut high) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if low == high {
        low -= 0.5;
        high += 0.5;
    }
    let width = (high - low) / bins as f64;

    let mut counts = vec![0u32; bins];
    for &value in values {
        let index = (((value - low) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: low + width * i as f64,
            end: if i + 1 == bins { high } else { low + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

/// Quartiles use linear interpolation between closest ranks.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;

    Some(BoxSummary {
        min: sorted[0],
        lower_quartile: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        upper_quartile: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
        mean,
    })
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
