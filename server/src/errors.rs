use std::convert::Infallible;

use serde::Serialize;
use warp::{http::StatusCode, Rejection, Reply};

/// Wrap the shared Formpost error type so Reject can be impl'd
#[derive(Debug)]
pub struct Error(pub formpost::Error);

impl warp::reject::Reject for Error {}

pub fn reject(err: formpost::Error) -> Rejection {
    warp::reject::custom(Error(err))
}

#[derive(Serialize)]
struct ErrorReply {
    success: bool,
    error: String,
}

/// Maps rejections to the JSON error envelope.
///
/// Validation problems are reported verbatim; relay and spool failures
/// are logged with their diagnostic and collapsed into a generic
/// message for the client.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let status_code;
    let error;

    if err.is_not_found() {
        status_code = StatusCode::NOT_FOUND;
        error = "Not found".to_string();
    } else if let Some(Error(e)) = err.find() {
        if e.is_client_error() {
            status_code = StatusCode::BAD_REQUEST;
            error = e.to_string();
        } else {
            log::error!("Request failed: {}", e);
            status_code = StatusCode::INTERNAL_SERVER_ERROR;
            error = "Failed to send message.".to_string();
        }
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        status_code = StatusCode::BAD_REQUEST;
        error = "Invalid request body".to_string();
    } else if let Some(forbidden) = err.find::<warp::filters::cors::CorsForbidden>() {
        status_code = StatusCode::FORBIDDEN;
        error = forbidden.to_string();
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        status_code = StatusCode::PAYLOAD_TOO_LARGE;
        error = "Request body too large".to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        status_code = StatusCode::METHOD_NOT_ALLOWED;
        error = "Method not allowed".to_string();
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        status_code = StatusCode::INTERNAL_SERVER_ERROR;
        error = "Internal server error".to_string();
    }

    let reply = warp::reply::json(&ErrorReply {
        success: false,
        error,
    });

    Ok(warp::reply::with_status(reply, status_code))
}
