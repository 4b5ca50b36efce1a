#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
}
pub mod rings {
    pub mod fraction;
}
pub mod rref {
    pub mod engine;
    pub mod input;
    pub mod row;
}

pub mod algebra;
pub mod error;

#[cfg(feature = "python")]
mod python;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rational_rref(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::display_rre_steps, m)?)?;
    m.add("rre", m.getattr("display_rre_steps")?)?;
    m.add("RRE", m.getattr("display_rre_steps")?)?;
    m.add_function(wrap_pyfunction!(python::disc, m)?)?;
    m.add_function(wrap_pyfunction!(python::quad, m)?)?;
    m.add_function(wrap_pyfunction!(python::expand_binomial, m)?)?;
    m.add_function(wrap_pyfunction!(python::dec, m)?)?;
    Ok(())
}
