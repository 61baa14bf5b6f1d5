use std::f64::consts::PI;

use rand::Rng;

/// Draws one sample from Normal(mean, std_dev) via the Box-Muller transform.
///
/// `u` is re-drawn while it is exactly zero so the log term stays finite.
/// A zero `std_dev` degenerates to the mean, which is a valid configuration
/// for deterministic scenarios.
pub fn normal_sample<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let mut u: f64 = 0.0;
    while u == 0.0 {
        u = rng.gen_range(0.0..1.0);
    }
    let v = rng.gen_range(0.0..1.0);

    let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
    mean + z * std_dev
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_many(mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(42);
        (0..count)
            .map(|_| normal_sample(&mut rng, mean, std_dev))
            .collect()
    }

    #[test]
    fn sample_mean_and_std_dev_converge_to_parameters() {
        let samples = sample_many(5.0, 2.0, 20_000);
        let n = samples.len() as f64;

        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        assert!((mean - 5.0).abs() < 0.1, "sample mean {mean} too far from 5.0");
        assert!(
            (std_dev - 2.0).abs() < 0.1,
            "sample std dev {std_dev} too far from 2.0"
        );
    }

    #[test]
    fn zero_std_dev_returns_the_mean() {
        let samples = sample_many(3.5, 0.0, 100);
        assert!(samples.iter().all(|s| *s == 3.5));
    }
}
