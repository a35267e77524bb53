/// A real function sampled by the trapezoidal rule on [0, 1].
///
/// `Send + Sync` so that one integrand can be shared by every worker thread.
pub trait Integrand: Send + Sync {
    fn value(&self, x: f64) -> f64;
}

/// f(x) = 4 / (1 + x²). Its integral over [0, 1] is π.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PiIntegrand;

impl Integrand for PiIntegrand {
    fn value(&self, x: f64) -> f64 {
        4.0 / (1.0 + x * x)
    }
}
