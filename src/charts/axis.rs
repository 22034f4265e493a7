//! Tick selection for the bar charts' value axes.

/// Rounds `raw` up to 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Ticks `0, step, 2·step, …` up to and including `max`.
///
/// A non-finite or non-positive `max` yields only the origin tick.
#[must_use]
pub fn value_ticks(max: f64, target_count: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0];
    }
    let step = nice_step(max / target_count.max(1) as f64);
    let mut ticks = Vec::new();
    let mut index = 0u32;
    loop {
        let tick = f64::from(index) * step;
        if tick - step * 1e-9 > max {
            break;
        }
        ticks.push(tick);
        index += 1;
    }
    ticks
}

/// Integer bar heights `1, 1+step, …` always ending at `max_height`.
#[must_use]
pub fn integer_ticks(max_height: u32, target_count: u32) -> Vec<u32> {
    let max_height = max_height.max(1);
    let step = max_height.div_ceil(target_count.max(1)).max(1);
    let mut ticks: Vec<u32> = (1..=max_height).step_by(step as usize).collect();
    if ticks.last() != Some(&max_height) {
        ticks.push(max_height);
    }
    ticks
}
