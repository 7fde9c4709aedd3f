use thiserror::Error;
use tracing::{error, warn};

use super::types::Report;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid JSON received from API")]
    InvalidJson { body: String },
}

// Some backends prepend header-like text to the response body
// (e.g. "Content-type: application/json;charset=UTF-8{..."). Try a direct
// parse first; on failure, retry once from the earliest '{' or '['.
pub fn decode_report(text: &str) -> Result<Report, DecodeError> {
    match serde_json::from_str::<Report>(text) {
        Ok(report) => Ok(report),
        Err(direct_err) => salvage_report(text, direct_err),
    }
}

fn salvage_report(text: &str, direct_err: serde_json::Error) -> Result<Report, DecodeError> {
    let Some(start) = first_json_token(text) else {
        error!("no JSON object or array found in response body: {text}");
        return Err(DecodeError::InvalidJson {
            body: text.to_string(),
        });
    };

    match serde_json::from_str::<Report>(&text[start..]) {
        Ok(report) => {
            warn!("parsed response after stripping {start} prefix bytes ({direct_err})");
            Ok(report)
        }
        Err(salvage_err) => {
            error!("failed to parse response after stripping prefix: {salvage_err}; body: {text}");
            Err(DecodeError::InvalidJson {
                body: text.to_string(),
            })
        }
    }
}

fn first_json_token(text: &str) -> Option<usize> {
    match (text.find('{'), text.find('[')) {
        (Some(obj), Some(arr)) => Some(obj.min(arr)),
        (Some(obj), None) => Some(obj),
        (None, Some(arr)) => Some(arr),
        (None, None) => None,
    }
}
