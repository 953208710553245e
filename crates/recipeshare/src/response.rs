//! Response envelope helpers.
//!
//! Every operation returns `{ statusCode, body }` where `body` is a JSON
//! string. Error bodies always carry `{ message, errorMsg, errorStack }`.

use std::fmt::{Debug, Display};

use lambda_http::{Body, Error, Response};
use serde_json::{json, Value};

/// Error-body message for the fetch operations (single and scan).
pub const FETCH_FAILURE: &str = "Failed to fetch post";

/// Error-body message shared by create, update and delete. All three paths
/// reuse the create wording; existing callers match on the exact string, so
/// it is kept byte-for-byte.
pub const CREATE_FAILURE: &str = "Failed to create post";

/// 200 envelope around an operation-specific success body.
pub fn success(body: Value) -> Result<Response<Body>, Error> {
    envelope(200, &body)
}

/// 500 envelope carrying the error's message and its debug rendering as
/// opaque strings.
pub fn failure(message: &str, err: &(impl Display + Debug)) -> Result<Response<Body>, Error> {
    envelope(
        500,
        &json!({
            "message": message,
            "errorMsg": err.to_string(),
            "errorStack": format!("{err:?}"),
        }),
    )
}

/// 404 for paths outside the five operations.
pub fn not_found() -> Result<Response<Body>, Error> {
    envelope(404, &json!({"error": "Not found"}))
}

fn envelope(status: u16, body: &Value) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(body.to_string()))
        .map_err(Box::new)?;
    Ok(response)
}
