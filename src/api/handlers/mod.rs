mod cars;
mod clients;
mod sales_orders;

use crate::api::errors::{bad_request, ApiError};
use crate::constants::GREETING_MESSAGE;
use crate::errors::Error;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub use cars::*;
pub use clients::*;
pub use sales_orders::*;

/// Body of every non-listing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensagem: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            mensagem: message.to_string(),
        }
    }
}

/// `GET /`
pub async fn greeting() -> Json<MessageResponse> {
    Json(MessageResponse::new(GREETING_MESSAGE))
}

/// Parses an identifier taken from the request path.
///
/// Anything that is not an integer is rejected here and never reaches the
/// database.
fn parse_id(raw: &str, failure_message: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|e| {
        warn!("Rejected identifier '{}': {}", raw, e);
        bad_request(failure_message)
    })
}

/// Maps the result of a create / remove / update call to a response.
///
/// `Ok(false)` means nothing was written (or no row matched) and `Err` is a
/// storage failure; both end as a 400, only the message differs.
fn write_outcome(
    action: &str,
    result: Result<bool, Error>,
    done: &str,
    not_done: &str,
    failed: &str,
) -> Result<Json<MessageResponse>, ApiError> {
    match result {
        Ok(true) => Ok(Json(MessageResponse::new(done))),
        Ok(false) => {
            warn!("{}: no row affected", action);
            Err(bad_request(not_done))
        }
        Err(e) => {
            error!("{}: {}", action, e);
            Err(bad_request(failed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn path_identifiers_must_be_integers() {
        assert_eq!(parse_id("12", "erro").unwrap(), 12);
        assert_eq!(parse_id(" 7 ", "erro").unwrap(), 7);

        let err = parse_id("abc", "erro").unwrap_err();
        assert_eq!(err.code, StatusCode::BAD_REQUEST.as_u16());
        assert_eq!(err.message, "erro");

        assert!(parse_id("1.5", "erro").is_err());
        assert!(parse_id("12abc", "erro").is_err());
        assert!(parse_id("99999999999", "erro").is_err());
    }

    #[test]
    fn outcomes_collapse_to_bad_request() {
        let ok = write_outcome("test", Ok(true), "feito", "nada", "falha").unwrap();
        assert_eq!(ok.0.mensagem, "feito");

        let untouched = write_outcome("test", Ok(false), "feito", "nada", "falha").unwrap_err();
        assert_eq!(untouched.code, 400);
        assert_eq!(untouched.message, "nada");

        let failed = write_outcome(
            "test",
            Err(Error::DieselError(diesel::result::Error::NotFound)),
            "feito",
            "nada",
            "falha",
        )
        .unwrap_err();
        assert_eq!(failed.code, 400);
        assert_eq!(failed.message, "falha");
    }
}
