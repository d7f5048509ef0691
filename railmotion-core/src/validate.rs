//! Input validation machinery.  Constructors call [ObjState::validate] and
//! fail fast with the accumulated [ValidationErrors] on physically
//! meaningless configurations.

use crate::imports::*;
use uom::si::{Dimension, Quantity, SI};

/// Returns a physically sensible instance of `Self` for tests and defaults.
pub trait Valid {
    fn valid() -> Self;
}

pub type ValidationResults = Result<(), ValidationErrors>;

#[derive(Debug, Default)]
pub struct ValidationErrors(pub Vec<anyhow::Error>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: anyhow::Error) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends all errors from `other`, attaching `context` to each.
    pub fn add_context(&mut self, context: &str, other: ValidationErrors) {
        for error in other.0 {
            self.0.push(error.context(format!("{context} validation failed")));
        }
    }

    /// Consumes self, returning `Ok(())` if no errors accumulated.
    pub fn make_err(self) -> ValidationResults {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error:#}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Object validity checks; the default implementation accepts everything.
pub trait ObjState {
    /// Returns true for placeholder instances that carry no real data.
    fn is_fake(&self) -> bool {
        false
    }
    fn validate(&self) -> ValidationResults {
        Ok(())
    }
}

/// Validates a field that must itself be a real (non-fake) valid object.
pub fn validate_field_real<T: ObjState>(errors: &mut ValidationErrors, field: &T, name: &str) {
    if field.is_fake() {
        errors.push(anyhow!("{} must not be a placeholder!", name));
    }
    if let Err(errs) = field.validate() {
        errors.add_context(name, errs);
    }
}

pub fn si_chk_num_fin<D>(
    errors: &mut ValidationErrors,
    val: &Quantity<D, SI<f64>, f64>,
    name: &str,
) where
    D: Dimension + ?Sized,
{
    if !val.value.is_finite() {
        errors.push(anyhow!("{} = {:?} must be finite!", name, val.value));
    }
}

pub fn si_chk_num_gtz_fin<D>(
    errors: &mut ValidationErrors,
    val: &Quantity<D, SI<f64>, f64>,
    name: &str,
) where
    D: Dimension + ?Sized,
{
    if !(val.value.is_finite() && val.value > 0.0) {
        errors.push(anyhow!(
            "{} = {:?} must be a positive finite number!",
            name,
            val.value
        ));
    }
}

pub fn si_chk_num_gez_fin<D>(
    errors: &mut ValidationErrors,
    val: &Quantity<D, SI<f64>, f64>,
    name: &str,
) where
    D: Dimension + ?Sized,
{
    if !(val.value.is_finite() && val.value >= 0.0) {
        errors.push(anyhow!(
            "{} = {:?} must be a non-negative finite number!",
            name,
            val.value
        ));
    }
}

pub fn si_chk_num_eqz<D>(
    errors: &mut ValidationErrors,
    val: &Quantity<D, SI<f64>, f64>,
    name: &str,
) where
    D: Dimension + ?Sized,
{
    if val.value != 0.0 {
        errors.push(anyhow!("{} = {:?} must equal zero!", name, val.value));
    }
}
