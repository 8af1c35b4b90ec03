use std::convert::Infallible;
use std::sync::Arc;

use warp::{reply::Reply, Filter, Rejection};

use formpost::config::Config;
use formpost::smtp::Mailer;

use super::config;
use super::controllers;
use super::errors;

/// Full router: GET banner + diagnostics, POST form routes, JSON
/// rejection recovery, CORS.
pub fn router(
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let cors = cors(&config);

    let get = warp::get().and(index().or(email_test(config.clone(), mailer.clone())));
    let post = warp::post().and(contact(config.clone(), mailer.clone()).or(career(config, mailer)));

    // The outer recover turns CORS-forbidden rejections, which the
    // wrapper raises after the inner recovery, into the same JSON
    // envelope as every other error
    get.or(post)
        .recover(errors::handle_rejection)
        .with(cors)
        .recover(errors::handle_rejection)
}

pub fn index() -> impl Filter<Extract = (&'static str,), Error = Rejection> + Clone {
    // GET / => 200 OK with a liveness banner
    warp::path::end().map(|| "Welcome to Formpost!")
}

/// Route for POST /contact
pub fn contact(
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("contact")
        .and(warp::path::end())
        .and(warp::body::content_length_limit(config::MAX_JSON_SIZE))
        .and(warp::body::json())
        .and(with_config(config))
        .and(with_mailer(mailer))
        .and_then(controllers::contact)
}

/// Route for POST /career
/// Multipart form with text fields and a `resume` file
pub fn career(
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("career")
        .and(warp::path::end())
        .and(warp::multipart::form().max_length(config::MAX_UPLOAD_SIZE))
        .and(with_config(config))
        .and(with_mailer(mailer))
        .and_then(controllers::career)
}

/// Route for GET /email-test
pub fn email_test(
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("email-test")
        .and(warp::path::end())
        .and(with_config(config))
        .and(with_mailer(mailer))
        .and_then(controllers::email_test)
}

fn cors(config: &Config) -> warp::filters::cors::Builder {
    let cors = warp::cors()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    if config.allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        cors.allow_origins(config.allowed_origins.iter().map(|o| o.as_str()))
    }
}

fn with_config(
    config: Arc<Config>,
) -> impl Filter<Extract = (Arc<Config>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}

fn with_mailer(
    mailer: Arc<dyn Mailer>,
) -> impl Filter<Extract = (Arc<dyn Mailer>,), Error = Infallible> + Clone {
    warp::any().map(move || mailer.clone())
}
