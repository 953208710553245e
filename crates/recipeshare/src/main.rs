mod config;
mod handlers;
mod response;
mod state;
mod storage;

use std::sync::Arc;

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, state::AppState, storage::dynamodb::DynamoDbPostStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipeshare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(table = %config.table_name, "starting recipeshare handler");

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);
    let state = AppState::new(Arc::new(DynamoDbPostStore::new(client, config.table_name)));

    run(service_fn(|event| route(&state, event))).await
}

/// Dispatch one invocation to the matching operation.
async fn route(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path().to_string();
    let post_id = path_post_id(&event);

    match (event.method(), path.as_str()) {
        (&Method::GET, "/posts") => handlers::get_posts(state).await,
        (&Method::POST, "/post") => handlers::create_post(state, event.body()).await,
        (&Method::GET, p) if p.starts_with("/post/") => {
            handlers::get_post(state, post_id.as_deref()).await
        }
        (&Method::PUT, p) if p.starts_with("/post/") => {
            handlers::update_post(state, post_id.as_deref(), event.body()).await
        }
        (&Method::DELETE, p) if p.starts_with("/post/") => {
            handlers::delete_post(state, post_id.as_deref()).await
        }
        _ => response::not_found(),
    }
}

/// `postId` from API Gateway path parameters, falling back to the trailing
/// path segment for function-URL invocations.
fn path_post_id(event: &Request) -> Option<String> {
    event
        .path_parameters_ref()
        .and_then(|params| params.first("postId"))
        .map(str::to_string)
        .or_else(|| {
            event
                .uri()
                .path()
                .strip_prefix("/post/")
                .filter(|rest| !rest.is_empty())
                .map(str::to_string)
        })
}

#[cfg(test)]
mod tests {
    use recipeshare_core::storage::PostStore;

    use super::*;
    use crate::storage::inmemory::InMemoryPostStore;

    fn test_state() -> AppState {
        AppState::new(Arc::new(InMemoryPostStore::new()))
    }

    fn request(method: Method, path: &str, body: &str) -> Request {
        let body = if body.is_empty() {
            Body::Empty
        } else {
            Body::Text(body.to_string())
        };
        lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    async fn test_route_unknown_path_is_not_found() {
        let state = test_state();
        let response = route(&state, request(Method::GET, "/recipes", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_route_create_and_fetch_by_path_segment() {
        let state = test_state();

        let response = route(
            &state,
            request(Method::POST, "/post", r#"{"recipeName":"Chili"}"#),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), 200);

        // Without API Gateway path parameters, the id comes from the path.
        let posts = state.posts.scan_posts().await.unwrap();
        let post_id = posts[0].data["postId"].as_str().unwrap().to_string();

        let response = route(&state, request(Method::GET, &format!("/post/{post_id}"), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_path_post_id_trailing_segment() {
        let event = request(Method::GET, "/post/abc-123", "");
        assert_eq!(path_post_id(&event), Some("abc-123".to_string()));
    }

    #[test]
    fn test_path_post_id_missing_segment() {
        let event = request(Method::GET, "/post/", "");
        assert_eq!(path_post_id(&event), None);
    }
}
