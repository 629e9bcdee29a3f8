use super::types::SeriesPoint;

/// Densifies a sparse scalar series by linear interpolation.
///
/// For every consecutive pair of samples, synthetic scalar points are
/// emitted at `prev.time + k * interval` for each step strictly inside the
/// gap, valued on the straight line between the two bracketing originals.
/// Original samples are preserved at their own timestamps, so for a
/// two-point series spanning `n` whole intervals the output holds `n + 1`
/// points. Output times are strictly increasing; cost is linear in the
/// output length.
///
/// The input is returned unchanged when densification does not apply:
/// fewer than two samples, an absent/non-finite/non-positive interval, or
/// any OHLC-shaped sample (interpolating composite prices is meaningless).
#[must_use]
pub fn densify_linear(points: &[SeriesPoint], interval: Option<f64>) -> Vec<SeriesPoint> {
    let Some(interval) = interval.filter(|step| step.is_finite() && *step > 0.0) else {
        return points.to_vec();
    };
    if points.len() < 2 || points.iter().any(|point| point.is_ohlc()) {
        return points.to_vec();
    }

    let mut densified = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        densified.push(pair[0]);

        let (prev_time, prev_value) = scalar_parts(pair[0]);
        let (next_time, next_value) = scalar_parts(pair[1]);
        let span = next_time - prev_time;
        if span <= 0.0 {
            continue;
        }

        // Step by index rather than accumulating, so long gaps do not drift.
        let mut step = 1_u64;
        loop {
            let time = prev_time + step as f64 * interval;
            if time >= next_time {
                break;
            }
            let value = prev_value + (time - prev_time) * (next_value - prev_value) / span;
            densified.push(SeriesPoint::scalar(time, value));
            step += 1;
        }
    }
    if let Some(last) = points.last() {
        densified.push(*last);
    }
    densified
}

fn scalar_parts(point: SeriesPoint) -> (f64, f64) {
    match point {
        SeriesPoint::Scalar { time, value } => (time, value),
        // Unreachable past the all-scalar guard.
        SeriesPoint::Ohlc { time, close, .. } => (time, close),
    }
}
