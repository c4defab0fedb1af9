//! Exact fractions and gaussian rationals based on `num`.
//!
//! [Fraction] is a rational number kept in canonical form, [Complex] is a complex number
//! with fraction components. Fallible operations take an [Operand] on the right-hand side
//! and report an [ArithmeticError]; an [ArithmeticError::TypeMismatch] means the operand
//! kind is not applicable to that operation.

pub mod cont_frac;
mod complex;
mod error;
mod fraction;
mod operand;
pub mod traits;

pub use complex::{Complex, POLAR_DECIMALS};
pub use cont_frac::ConvergentConfig;
pub use error::ArithmeticError;
pub use fraction::Fraction;
pub use operand::Operand;
pub use traits::{Approximation, FractionBase};

#[cfg(feature = "num-bigint")]
pub use complex::BigComplex;
#[cfg(feature = "num-bigint")]
pub use fraction::BigFraction;
