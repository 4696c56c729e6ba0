use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theory::{resolve, DiatonicTable, InvalidInputError, Progression};

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressionRequest {
    pub prog: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyListItem {
    pub key: &'static str,
    pub chords: &'static [&'static str; 7],
}

#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    pub keys: Vec<KeyListItem>,
}

#[derive(Debug)]
pub enum ProgressionPayloadError {
    Parse(serde_json::Error),
    Invalid(InvalidInputError),
}

impl fmt::Display for ProgressionPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Invalid request body: {err}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ProgressionPayloadError {}

impl From<InvalidInputError> for ProgressionPayloadError {
    fn from(err: InvalidInputError) -> Self {
        Self::Invalid(err)
    }
}

pub fn health() -> HealthResponse {
    HealthResponse {
        status: "ok",
        service: "triadic",
        version: env!("CARGO_PKG_VERSION"),
    }
}

pub fn keys() -> KeysResponse {
    KeysResponse {
        keys: DiatonicTable
            .keys()
            .map(|key| KeyListItem {
                key: key.tonic(),
                chords: key.chords(),
            })
            .collect(),
    }
}

/// Handles the JSON body of `POST /api/progressions`: `{"prog": "I V vi IV"}`.
pub fn progressions_from_body(body: &str) -> Result<Progression, ProgressionPayloadError> {
    let request: ProgressionRequest =
        serde_json::from_str(body).map_err(ProgressionPayloadError::Parse)?;
    Ok(resolve(&request.prog)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_must_be_json_with_prog() {
        let err = progressions_from_body("{bad json}").unwrap_err();
        assert!(matches!(err, ProgressionPayloadError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid request body"));

        let err = progressions_from_body(r#"{"progression":"I"}"#).unwrap_err();
        assert!(matches!(err, ProgressionPayloadError::Parse(_)));
    }

    #[test]
    fn invalid_numeral_is_not_a_parse_error() {
        let err = progressions_from_body(r#"{"prog":"1 8"}"#).unwrap_err();
        assert!(matches!(
            err,
            ProgressionPayloadError::Invalid(InvalidInputError::UnknownNumeral(ref token)) if token == "8"
        ));
    }

    #[test]
    fn keys_lists_whole_table() {
        let response = keys();
        assert_eq!(response.keys.len(), 12);
        assert_eq!(response.keys[0].key, "C");
        assert_eq!(response.keys[6].chords[6], "E#dim");
    }
}
