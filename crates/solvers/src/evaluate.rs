use crate::Error;

/// Evaluates `f` at `x`, rejecting non-finite arguments and results.
pub(crate) fn evaluate<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if x.is_finite() && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { x, value })
    }
}
