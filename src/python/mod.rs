/*
    Trig Tutor, sine, cosine and tangent on the unit circle
    Copyright (C) 2024 Trig Tutor contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::handler::{respond, CalculateRequest};
use crate::render::RenderConfig;
use crate::trig::evaluate;
use crate::HandlerError;

impl From<HandlerError> for PyErr {
    fn from(err: HandlerError) -> PyErr {
        match err {
            HandlerError::MalformedInput { .. } => PyValueError::new_err(err.to_string()),
            HandlerError::RenderFailure { .. } => PyRuntimeError::new_err(err.public_message()),
        }
    }
}

/// Returns (sin, cos, tan or None, quadrant, signs or None) of the angle in degrees.
///
/// The signs read e.g. "sin > 0, cos < 0", and are None on the axes.
#[pyfunction]
#[pyo3(name = "evaluate")]
fn py_evaluate(angle: f64) -> (f64, f64, Option<f64>, String, Option<&'static str>) {
    let eval = evaluate(angle);
    (
        eval.sine,
        eval.cosine,
        eval.tangent,
        eval.quadrant.to_string(),
        eval.quadrant.sign_hint(),
    )
}

/// Returns the JSON payload with the values of the functions and both images in base64.
#[pyfunction]
#[pyo3(signature = (angle, show_tan = true))]
fn calculate(py: Python<'_>, angle: f64, show_tan: bool) -> PyResult<String> {
    let request = CalculateRequest::new(angle, show_tan)?;
    let response = py.allow_threads(|| respond(request, &RenderConfig::default()))?;
    serde_json::to_string(&response).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pymodule]
fn _trig_tutor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(py_evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(calculate, m)?)?;

    Ok(())
}
