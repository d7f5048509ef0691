use uom::si::{Dimension, Quantity, SI};

/// Formats a `[file:line]` tag, optionally with a stringified expression and
/// its debug value, for error contexts and log messages.
#[macro_export]
macro_rules! format_dbg {
    ($dbg_expr:expr) => {
        format!(
            "[{}:{}] {}: {:?}",
            file!(),
            line!(),
            stringify!($dbg_expr),
            $dbg_expr
        )
    };
    () => {
        format!("[{}:{}]", file!(), line!())
    };
}

/// Returns true if `val1` and `val2` are within relative (or, near zero,
/// absolute) `epsilon` of each other, defaulting to 1e-8.
pub fn almost_eq(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(1e-8);
    ((val2 - val1) / (val1 + val2)).abs() < epsilon || (val2 - val1).abs() < epsilon
}

/// [almost_eq] on the base-unit values of two uom quantities.
pub fn almost_eq_uom<D>(
    val1: &Quantity<D, SI<f64>, f64>,
    val2: &Quantity<D, SI<f64>, f64>,
    epsilon: Option<f64>,
) -> bool
where
    D: Dimension + ?Sized,
{
    almost_eq(val1.value, val2.value, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_eq() {
        assert!(almost_eq(1.0, 1.0 + 1e-9, None));
        assert!(almost_eq(0.0, 0.0, None));
        assert!(!almost_eq(1.0, 1.1, None));
        assert!(almost_eq(1.0, 1.05, Some(0.1)));
    }
}
