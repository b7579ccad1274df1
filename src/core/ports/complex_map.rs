use num::complex::Complex64;

/// A pure complex-valued function of one complex variable, evaluated
/// point-wise over the grid.
pub trait ComplexMap: Send + Sync {
    fn eval(&self, z: Complex64) -> Complex64;
}

impl<F> ComplexMap for F
where
    F: Fn(Complex64) -> Complex64 + Send + Sync,
{
    fn eval(&self, z: Complex64) -> Complex64 {
        self(z)
    }
}

/// A complex function with an extra complex parameter, for maps whose shape
/// is driven by the modulation signal each frame.
pub trait ParametricMap: Send + Sync {
    fn eval(&self, z: Complex64, c: Complex64) -> Complex64;
}

impl<F> ParametricMap for F
where
    F: Fn(Complex64, Complex64) -> Complex64 + Send + Sync,
{
    fn eval(&self, z: Complex64, c: Complex64) -> Complex64 {
        self(z, c)
    }
}

/// A complex function together with its derivative, as Newton iteration
/// needs both.
pub trait DifferentiableMap: Send + Sync {
    /// f(z)
    fn value(&self, z: Complex64) -> Complex64;

    /// f'(z)
    fn slope(&self, z: Complex64) -> Complex64;
}

/// `f(z) = z⁴ − 1`, whose roots are the fourth roots of unity.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnityQuartic;

impl DifferentiableMap for UnityQuartic {
    fn value(&self, z: Complex64) -> Complex64 {
        z * z * z * z - Complex64::new(1.0, 0.0)
    }

    fn slope(&self, z: Complex64) -> Complex64 {
        4.0 * z * z * z
    }
}

impl ComplexMap for UnityQuartic {
    fn eval(&self, z: Complex64) -> Complex64 {
        self.value(z)
    }
}

/// `f(z) = (z − 1) / (z² + z + 1)`, a rational map with one zero and two
/// poles; a good domain-coloring subject.
#[derive(Debug, Default, Copy, Clone)]
pub struct RationalMap;

impl ComplexMap for RationalMap {
    fn eval(&self, z: Complex64) -> Complex64 {
        (z - 1.0) / (z * z + z + 1.0)
    }
}

/// `f(z, c) = exp(c · ln z)`, the complex power map. `ln z` is undefined at
/// zero and discontinuous across the negative real axis; the resulting seam
/// in the image is expected.
#[derive(Debug, Default, Copy, Clone)]
pub struct ComplexPower;

impl ParametricMap for ComplexPower {
    fn eval(&self, z: Complex64, c: Complex64) -> Complex64 {
        (c * z.ln()).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex64, b: Complex64) {
        assert!((a - b).norm() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn test_unity_quartic_vanishes_at_roots_of_unity() {
        let f = UnityQuartic;

        assert_close(f.value(Complex64::new(1.0, 0.0)), Complex64::new(0.0, 0.0));
        assert_close(f.value(Complex64::new(-1.0, 0.0)), Complex64::new(0.0, 0.0));
        assert_close(f.value(Complex64::new(0.0, 1.0)), Complex64::new(0.0, 0.0));
        assert_close(f.value(Complex64::new(0.0, -1.0)), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_unity_quartic_slope() {
        let f = UnityQuartic;

        assert_close(f.slope(Complex64::new(1.0, 0.0)), Complex64::new(4.0, 0.0));
        assert_close(f.slope(Complex64::new(0.0, 1.0)), Complex64::new(0.0, -4.0));
    }

    #[test]
    fn test_rational_map_zero_at_one() {
        let f = RationalMap;

        assert_close(f.eval(Complex64::new(1.0, 0.0)), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_complex_power_matches_real_powers() {
        let f = ComplexPower;
        let squared = f.eval(Complex64::new(3.0, 0.0), Complex64::new(2.0, 0.0));

        assert_close(squared, Complex64::new(9.0, 0.0));
    }

    #[test]
    fn test_closure_implements_complex_map() {
        let double = |z: Complex64| z * 2.0;

        assert_close(
            double.eval(Complex64::new(1.0, 1.0)),
            Complex64::new(2.0, 2.0),
        );
    }
}
