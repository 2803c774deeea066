//! Common utilities: the regressor matrix interface and signal level helpers.

mod f64_array_ext;
mod regressors;

pub use f64_array_ext::F64ArrayExt;
pub use regressors::{DataType, Element, MatrixView, Regressors};
