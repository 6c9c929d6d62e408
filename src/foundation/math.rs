use statrs::statistics::Statistics;

/// Relative tolerance used by [`all_close`].
pub const CLOSE_RTOL: f64 = 1e-5;
/// Absolute tolerance used by [`all_close`].
pub const CLOSE_ATOL: f64 = 1e-8;

/// Linearly remap `v` from `[old_min, old_max]` to `[new_min, new_max]`.
///
/// The caller guarantees `old_min != old_max`.
pub fn remap(v: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    (v - old_min) / (old_max - old_min) * (new_max - new_min) + new_min
}

/// `n` evenly spaced samples covering `[0, 1]` inclusive.
pub fn linspace01(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Piecewise-linear interpolation of `x` over the points `(xp[i], fp[i])`.
///
/// `xp` is expected in non-decreasing order. Outside `[xp[0], xp[last]]` the
/// nearest end value is returned. With repeated times the later segment wins.
/// Returns `NaN` for empty input or when `x` cannot be bracketed (NaN times).
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    let idx = xp[..n].partition_point(|&v| v <= x);
    if idx == 0 || idx >= n {
        return f64::NAN;
    }
    let (x0, x1) = (xp[idx - 1], xp[idx]);
    let (y0, y1) = (fp[idx - 1], fp[idx]);
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Discrete derivative with unit spacing: one-sided differences at the ends,
/// central differences in the interior.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut out = Vec::with_capacity(n);
            out.push(values[1] - values[0]);
            for i in 1..n - 1 {
                out.push((values[i + 1] - values[i - 1]) / 2.0);
            }
            out.push(values[n - 1] - values[n - 2]);
            out
        }
    }
}

/// True when every value is within tolerance of the first one.
pub fn all_close(values: &[f64]) -> bool {
    let Some(&first) = values.first() else {
        return true;
    };
    values
        .iter()
        .all(|&v| (v - first).abs() <= CLOSE_ATOL + CLOSE_RTOL * first.abs())
}

/// Mean of absolute values.
pub fn mean_abs(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).mean()
}

/// Population standard deviation (no Bessel correction).
pub fn population_std(values: &[f64]) -> f64 {
    values.population_std_dev()
}

/// Scale a normalized value to an 8-bit channel, clamping first.
pub fn unit_to_u8(v: f64) -> u8 {
    byte_from_f64(v * 255.0)
}

/// Round and clamp a `[0, 255]` intensity to an 8-bit channel.
pub fn byte_from_f64(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round() as u8
}

/// Fresnel integrals `(S(x), C(x))` with the `π t² / 2` normalization.
///
/// Power series for `|x| <= 2.5`, asymptotic expansion beyond.
pub fn fresnel(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (f64::NAN, f64::NAN);
    }
    let sign = x.signum();
    let ax = x.abs();
    let (s, c) = if ax <= 2.5 {
        fresnel_series(ax)
    } else {
        fresnel_asymptotic(ax)
    };
    (sign * s, sign * c)
}

fn fresnel_series(x: f64) -> (f64, f64) {
    let z = std::f64::consts::FRAC_PI_2 * x * x;
    let mut term = x;
    let mut s = 0.0;
    let mut c = 0.0;
    for k in 0..200u32 {
        let contrib = term / f64::from(2 * k + 1);
        let negative = k % 4 >= 2;
        let signed = if negative { -contrib } else { contrib };
        if k % 2 == 0 {
            c += signed;
        } else {
            s += signed;
        }
        if k > 2 && contrib.abs() < 1e-17 * (s.abs() + c.abs()).max(1e-300) {
            break;
        }
        term *= z / f64::from(k + 1);
    }
    (s, c)
}

fn fresnel_asymptotic(x: f64) -> (f64, f64) {
    let pi = std::f64::consts::PI;
    let u = pi * x * x;
    let inv_u2 = 1.0 / (u * u);

    // f(x) ~ 1/(πx) Σ (-1)^m (4m-1)!! / u^{2m}, g(x) ~ 1/(π²x³) Σ (-1)^m (4m+1)!! / u^{2m}
    let mut f_sum = 1.0;
    let mut g_sum = 1.0;
    let mut f_term = 1.0;
    let mut g_term = 1.0;
    for m in 1..8u32 {
        let m = f64::from(m);
        let next_f = -f_term * (4.0 * m - 3.0) * (4.0 * m - 1.0) * inv_u2;
        let next_g = -g_term * (4.0 * m - 1.0) * (4.0 * m + 1.0) * inv_u2;
        if next_f.abs() > f_term.abs() || next_g.abs() > g_term.abs() {
            break;
        }
        f_term = next_f;
        g_term = next_g;
        f_sum += f_term;
        g_sum += g_term;
    }
    let f = f_sum / (pi * x);
    let g = g_sum / (pi * pi * x * x * x);

    let phase = std::f64::consts::FRAC_PI_2 * x * x;
    let (sin, cos) = phase.sin_cos();
    let c = 0.5 + f * sin - g * cos;
    let s = 0.5 - f * cos - g * sin;
    (s, c)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
