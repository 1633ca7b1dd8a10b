//! Run-parameter extraction from result file names.
//!
//! Result files are named
//! `results_<timestamp>_n=<n>_a=<a>_j=<j>_l=<l>_m=<m>_b=<b>_g=<g>_.csv`.
//! Only the seven `key=value` tokens are read; the timestamp and anything
//! after the `g` token are ignored.

use crate::error::AggregateError;
use crate::models::RunParameters;

/// Token positions (after splitting on `_`) that hold the run parameters.
const PARAM_TOKENS: std::ops::Range<usize> = 2..9;

/// Parse the seven run parameters out of a result file name.
///
/// Expects a bare file name, not a path. Extraction is positional: token
/// keys are not checked against the expected letters, matching the harness
/// that names the files.
pub fn parse_run_parameters(name: &str) -> Result<RunParameters, AggregateError> {
    let tokens: Vec<&str> = name.split('_').collect();

    if tokens.len() < PARAM_TOKENS.end {
        return Err(bad_name(
            name,
            format!(
                "expected at least {} '_'-separated tokens, found {}",
                PARAM_TOKENS.end,
                tokens.len()
            ),
        ));
    }

    let mut values = [0i64; 7];
    for (i, slot) in values.iter_mut().enumerate() {
        let token = tokens[PARAM_TOKENS.start + i];
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| bad_name(name, format!("token '{token}' is not key=value")))?;
        *slot = value
            .parse()
            .map_err(|_| bad_name(name, format!("'{key}' value '{value}' is not an integer")))?;
    }

    let [n, a, j, l, m, b, g] = values;
    Ok(RunParameters { n, a, j, l, m, b, g })
}

fn bad_name(name: &str, reason: String) -> AggregateError {
    AggregateError::FilenameFormat {
        name: name.to_string(),
        reason,
    }
}
