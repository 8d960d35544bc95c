use super::Error;

/// A bracket `[a, b]` with its function values, always holding a sign change.
///
/// The endpoints keep the caller's order; `a` may be greater than `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
}

impl Bracket {
    /// Creates a bracket, rejecting endpoints whose values share a sign.
    pub(super) fn new(a: f64, fa: f64, b: f64, fb: f64) -> Result<Self, Error> {
        if fa * fb > 0.0 {
            return Err(Error::NoSignChange { a, b, fa, fb });
        }
        Ok(Self { a, b, fa, fb })
    }

    /// Returns the current endpoints as `[a, b]`.
    pub(super) fn endpoints(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the endpoint with the smaller `|f|`, preferring `a` on ties.
    pub(super) fn best_endpoint(&self) -> (f64, f64) {
        if self.fa.abs() <= self.fb.abs() {
            (self.a, self.fa)
        } else {
            (self.b, self.fb)
        }
    }

    /// Returns the zero crossing of the chord through both endpoints.
    pub(super) fn estimate(&self) -> f64 {
        self.b - self.fb * (self.b - self.a) / (self.fb - self.fa)
    }

    /// Replaces the endpoint on the same side of the root as `x`.
    ///
    /// If `f(a)` and `f(x)` differ in sign the root lies in `[a, x]` and `b`
    /// moves; otherwise `a` moves.
    pub(super) fn shrink(&mut self, x: f64, fx: f64) {
        if self.fa * fx < 0.0 {
            self.b = x;
            self.fb = fx;
        } else {
            self.a = x;
            self.fa = fx;
        }
    }
}
