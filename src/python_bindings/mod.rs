//! Python bindings that expose the bit scans via PyO3.
//!
//! Built as the `bitops` extension module. Every entry point takes one
//! positional integer in `0..2**64`. Wrong arity, keyword arguments,
//! non-integers and out-of-range values all raise `bitops.InvalidArgument`,
//! a `TypeError` subclass, so existing `except TypeError` handlers still
//! catch it.
use pyo3::{
    create_exception,
    exceptions::PyTypeError,
    prelude::*,
    types::{PyDict, PyInt, PyModule, PyTuple},
};

use crate::args::{self, HostValue};
use crate::{bitboard, scan, BitScanError};

create_exception!(
    bitops,
    InvalidArgument,
    PyTypeError,
    "Call did not pass exactly one unsigned 64-bit integer."
);

impl From<BitScanError> for PyErr {
    fn from(err: BitScanError) -> Self {
        InvalidArgument::new_err(err.to_string())
    }
}

fn host_value(value: &Bound<'_, PyAny>) -> HostValue {
    // bool is an int subclass and scans as 0 / 1
    if !value.is_instance_of::<PyInt>() {
        let type_name = value
            .get_type()
            .name()
            .map(|name| name.to_string())
            .unwrap_or_else(|_| "object".to_string());
        return HostValue::NotInteger(type_name);
    }

    match value.extract::<i128>() {
        Ok(wide) => HostValue::Int(wide),
        Err(_) => HostValue::WideInt(value.to_string()),
    }
}

fn dispatch<R>(
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
    op: impl FnOnce(u64) -> Result<R, BitScanError>,
) -> PyResult<R> {
    let values: Vec<HostValue> = args.iter().map(|arg| host_value(&arg)).collect();
    let keyword_count = kwargs.map_or(0, |kw| kw.len());
    Ok(args::call_with_mask(&values, keyword_count, op)?)
}

/// Index of the least-significant set bit, or -1 for 0.
#[pyfunction]
#[pyo3(name = "ctz", signature = (*args, **kwargs))]
fn py_ctz(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<i32> {
    dispatch(args, kwargs, |x| Ok(scan::ctz(x)))
}

/// Index of the most-significant set bit, or -1 for 0.
#[pyfunction]
#[pyo3(name = "clz", signature = (*args, **kwargs))]
fn py_clz(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<i32> {
    dispatch(args, kwargs, |x| Ok(scan::clz(x)))
}

/// Mask with only bit `index` set.
#[pyfunction]
#[pyo3(name = "bit", signature = (*args, **kwargs))]
fn py_bit(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<u64> {
    dispatch(args, kwargs, args::bit_from_index)
}

/// Clear the lowest set bit.
///
/// Returns:
///     `(remaining, index)` tuple; `(0, -1)` for an empty board.
#[pyfunction]
#[pyo3(name = "pop_lsb", signature = (*args, **kwargs))]
fn py_pop_lsb(
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<(u64, i32)> {
    dispatch(args, kwargs, |bb| Ok(bitboard::pop_lsb(bb)))
}

/// Create Python module.
#[pymodule]
pub fn bitops(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("InvalidArgument", m.py().get_type::<InvalidArgument>())?;
    m.add_function(wrap_pyfunction!(py_ctz, m)?)?;
    m.add_function(wrap_pyfunction!(py_clz, m)?)?;
    m.add_function(wrap_pyfunction!(py_bit, m)?)?;
    m.add_function(wrap_pyfunction!(py_pop_lsb, m)?)?;
    Ok(())
}
