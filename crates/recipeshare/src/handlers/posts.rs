//! Post CRUD handlers.
//!
//! Each operation is a straight-line sequence: parse input, make one store
//! call, shape the success body. Anything that goes wrong on the way is
//! caught at the boundary and converted into the 500 envelope.

use lambda_http::{Body, Error, Response};
use serde_json::{json, Value};

use recipeshare_core::post::{CreatePost, Post};
use recipeshare_core::storage::FieldMap;

use crate::{
    handlers::HandlerError,
    response::{self, CREATE_FAILURE, FETCH_FAILURE},
    state::AppState,
};

const FETCHED_ONE: &str = "Successfully fetched post data.";
const FETCHED_ALL: &str = "Successfully fetched all.";
const CREATED: &str = "Successfully created post.";
// Also returned by delete; existing callers match on the exact string, so
// the wording stays byte-for-byte.
const UPDATED: &str = "Successfully updated post.";

/// Fetch a single post by its key (GET /post/{postId}).
pub async fn get_post(state: &AppState, post_id: Option<&str>) -> Result<Response<Body>, Error> {
    match get_post_impl(state, post_id).await {
        Ok(body) => response::success(body),
        Err(err) => {
            tracing::error!(error = %err, "get_post failed");
            response::failure(FETCH_FAILURE, &err)
        }
    }
}

async fn get_post_impl(state: &AppState, post_id: Option<&str>) -> Result<Value, HandlerError> {
    let post_id = post_id.ok_or(HandlerError::MissingPathParameter("postId"))?;
    let record = state.posts.get_post(post_id).await?;
    tracing::debug!(post_id, found = record.is_some(), "fetched post");

    // Absence is not an error: the body carries an empty object and no
    // rawData field.
    Ok(match record {
        Some(record) => json!({
            "message": FETCHED_ONE,
            "data": record.data,
            "rawData": record.raw,
        }),
        None => json!({
            "message": FETCHED_ONE,
            "data": {},
        }),
    })
}

/// Fetch every post in the table (GET /posts, unbounded scan).
pub async fn get_posts(state: &AppState) -> Result<Response<Body>, Error> {
    match get_posts_impl(state).await {
        Ok(body) => response::success(body),
        Err(err) => {
            tracing::error!(error = %err, "get_posts failed");
            response::failure(FETCH_FAILURE, &err)
        }
    }
}

async fn get_posts_impl(state: &AppState) -> Result<Value, HandlerError> {
    let records = state.posts.scan_posts().await?;
    tracing::debug!(count = records.len(), "scanned posts");

    let (data, items): (Vec<Value>, Vec<Value>) = records
        .into_iter()
        .map(|record| (Value::Object(record.data), record.raw))
        .unzip();

    Ok(json!({
        "message": FETCHED_ALL,
        "data": data,
        "Items": items,
    }))
}

/// Create a post with a server-generated `postId` (POST /post).
pub async fn create_post(state: &AppState, body: &[u8]) -> Result<Response<Body>, Error> {
    match create_post_impl(state, body).await {
        Ok(body) => response::success(body),
        Err(err) => {
            tracing::error!(error = %err, "create_post failed");
            response::failure(CREATE_FAILURE, &err)
        }
    }
}

async fn create_post_impl(state: &AppState, body: &[u8]) -> Result<Value, HandlerError> {
    let payload: CreatePost = serde_json::from_slice(body)?;
    let post = Post::from_payload(payload);
    tracing::debug!(post_id = %post.post_id, "creating post");

    let create_result = state.posts.create_post(post.into_item()).await?;

    Ok(json!({
        "message": CREATED,
        "createResult": create_result,
    }))
}

/// Overwrite the supplied fields on an existing post (PUT /post/{postId}).
///
/// The payload's keys are arbitrary field names; the store escapes them with
/// placeholders, so reserved words are safe. An empty payload is passed
/// through and surfaces the store's own error.
pub async fn update_post(
    state: &AppState,
    post_id: Option<&str>,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    match update_post_impl(state, post_id, body).await {
        Ok(body) => response::success(body),
        Err(err) => {
            tracing::error!(error = %err, "update_post failed");
            response::failure(CREATE_FAILURE, &err)
        }
    }
}

async fn update_post_impl(
    state: &AppState,
    post_id: Option<&str>,
    body: &[u8],
) -> Result<Value, HandlerError> {
    let post_id = post_id.ok_or(HandlerError::MissingPathParameter("postId"))?;
    let fields: FieldMap = serde_json::from_slice(body)?;
    tracing::debug!(post_id, field_count = fields.len(), "updating post");

    let update_result = state.posts.update_post(post_id, &fields).await?;

    Ok(json!({
        "message": UPDATED,
        "updateResult": update_result,
    }))
}

/// Remove a post by its key (DELETE /post/{postId}); absent keys are a no-op.
pub async fn delete_post(state: &AppState, post_id: Option<&str>) -> Result<Response<Body>, Error> {
    match delete_post_impl(state, post_id).await {
        Ok(body) => response::success(body),
        Err(err) => {
            tracing::error!(error = %err, "delete_post failed");
            response::failure(CREATE_FAILURE, &err)
        }
    }
}

async fn delete_post_impl(state: &AppState, post_id: Option<&str>) -> Result<Value, HandlerError> {
    let post_id = post_id.ok_or(HandlerError::MissingPathParameter("postId"))?;
    tracing::debug!(post_id, "deleting post");

    let delete_result = state.posts.delete_post(post_id).await?;

    Ok(json!({
        "message": UPDATED,
        "deleteResult": delete_result,
    }))
}
