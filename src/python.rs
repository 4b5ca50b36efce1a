use crate::algebra;
use crate::rings::fraction::Fraction;
use crate::rref::engine::{reduced_row_echelon, Step, StepObserver};
use crate::rref::input::parse_matrix;
use crate::rref::row::{format_matrix, Row};
use log::warn;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyString;

fn value_error(error: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(error.to_string())
}

// Goes through `str()`, so ints, `fractions.Fraction` and decimal strings all work
fn to_fraction(value: &Bound<'_, PyAny>) -> PyResult<Fraction> {
    value.str()?.to_cow()?.parse().map_err(value_error)
}

fn to_python<'py>(py: Python<'py>, value: &Fraction) -> PyResult<Bound<'py, PyAny>> {
    if value.is_integer() {
        return Ok(value.num.clone().into_pyobject(py)?.into_any());
    }
    py.import("fractions")?
        .getattr("Fraction")?
        .call1((value.num.clone(), value.den.clone()))
}

fn rows_to_python<'py>(py: Python<'py>, matrix: &[Row]) -> PyResult<Vec<Vec<Bound<'py, PyAny>>>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|value| to_python(py, value)).collect())
        .collect()
}

// Python's own `print`, so the steps follow `sys.stdout` redirection
struct PythonPrint<'py> {
    print: Bound<'py, PyAny>,
}

impl StepObserver for PythonPrint<'_> {
    fn observe(&mut self, step: Step, matrix: &[Row]) {
        if let Err(error) = self.print.call1((format!("{}\n\n", format_matrix(matrix)),)) {
            warn!("Could not print the {:?} snapshot: {}", step, error);
        }
    }
}

#[pyfunction]
#[pyo3(signature = (input=None))]
pub fn display_rre_steps<'py>(
    py: Python<'py>,
    input: Option<&Bound<'py, PyAny>>,
) -> PyResult<Vec<Vec<Bound<'py, PyAny>>>> {
    let builtins = py.import("builtins")?;
    let input = match input {
        Some(value) if value.is_truthy()? => value.clone(),
        _ => builtins.getattr("input")?.call1(("Matrix?",))?,
    };

    let matrix = match input.downcast::<PyString>() {
        Ok(text) => parse_matrix(&text.to_cow()?).map_err(value_error)?,
        Err(_) => input
            .try_iter()?
            .map(|row| -> PyResult<Row> {
                row?.try_iter()?
                    .map(|value| to_fraction(&value?))
                    .collect()
            })
            .collect::<PyResult<Vec<Row>>>()?,
    };

    let mut observer = PythonPrint {
        print: builtins.getattr("print")?,
    };
    let reduced = reduced_row_echelon(matrix, &mut observer).map_err(value_error)?;
    rows_to_python(py, &reduced)
}

#[pyfunction]
pub fn disc<'py>(
    py: Python<'py>,
    a: &Bound<'py, PyAny>,
    b: &Bound<'py, PyAny>,
    c: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let value = algebra::discriminant(&to_fraction(a)?, &to_fraction(b)?, &to_fraction(c)?);
    to_python(py, &value)
}

#[pyfunction]
#[pyo3(signature = (a, b, c=None))]
pub fn quad<'py>(
    py: Python<'py>,
    a: &Bound<'py, PyAny>,
    b: &Bound<'py, PyAny>,
    c: Option<&Bound<'py, PyAny>>,
) -> PyResult<(Bound<'py, PyAny>, Bound<'py, PyAny>)> {
    let c = match c {
        Some(c) => to_fraction(c)?,
        None => Fraction::from(0),
    };
    let (r1, r2) =
        algebra::quadratic_roots(&to_fraction(a)?, &to_fraction(b)?, &c).map_err(value_error)?;
    Ok((to_python(py, &r1)?, to_python(py, &r2)?))
}

#[pyfunction]
pub fn expand_binomial<'py>(
    py: Python<'py>,
    a: &Bound<'py, PyAny>,
    b: &Bound<'py, PyAny>,
) -> PyResult<(Bound<'py, PyAny>, Bound<'py, PyAny>, Bound<'py, PyAny>)> {
    let (a2, ab2, b2) = algebra::expand_binomial(&to_fraction(a)?, &to_fraction(b)?);
    Ok((to_python(py, &a2)?, to_python(py, &ab2)?, to_python(py, &b2)?))
}

/// A float for a single number, a list of floats for an iterable.
#[pyfunction]
pub fn dec<'py>(py: Python<'py>, nums: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    if nums.is_instance_of::<PyString>() {
        return Ok(to_fraction(nums)?.to_f64().into_pyobject(py)?.into_any());
    }

    match nums.try_iter() {
        Ok(iter) => {
            let values = iter
                .map(|value| to_fraction(&value?))
                .collect::<PyResult<Vec<Fraction>>>()?;
            Ok(algebra::decimals(&values).into_pyobject(py)?.into_any())
        }
        Err(_) => Ok(to_fraction(nums)?.to_f64().into_pyobject(py)?.into_any()),
    }
}
