use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::model::Blog;
use crate::service::{ServiceError, SharedBlogService};
use crate::telemetry::RequestId;

/// A failed request: status plus a plain-text body.
pub type ApiError = (Status, String);

type ApiResult<T> = Result<T, ApiError>;

/// Body of the JSON errors raised by catchers, before any handler runs.
#[derive(Serialize)]
pub struct CatcherError {
    pub error: String,
    pub code: String,
}

fn caught(msg: &str, code: &str) -> Json<CatcherError> {
    Json(CatcherError { error: msg.to_string(), code: code.to_string() })
}

/// Maps a service failure onto the response the client sees.
pub fn service_err(e: ServiceError) -> ApiError {
    let status = match e {
        ServiceError::AlreadyExists(_) => Status::Conflict,
        ServiceError::NotFound(_) => Status::NotFound,
        ServiceError::Other(_) => Status::InternalServerError,
    };
    let body = if status == Status::InternalServerError {
        format!("An error occurred: {}", e)
    } else {
        e.to_string()
    };
    if status.code >= 500 {
        tracing::error!(status = status.code, error = %body, "blog service failed");
    } else {
        tracing::warn!(status = status.code, error = %body, "blog request rejected");
    }
    (status, body)
}

fn not_found(blog_id: i64) -> ApiError {
    service_err(ServiceError::NotFound(blog_id))
}

// ─── Routes ───

#[get("/health")]
pub fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

#[post("/blog", format = "json", data = "<blog>")]
pub fn create_blog(blog: Json<Blog>, rid: RequestId, svc: &State<SharedBlogService>) -> ApiResult<(Status, Json<Blog>)> {
    let saved = svc.save_blog(blog.into_inner()).map_err(service_err)?;
    tracing::info!(request_id = %rid.0, blog_id = saved.blog_id, "blog created");
    Ok((Status::Created, Json(saved)))
}

#[get("/blogs")]
pub fn list_blogs(svc: &State<SharedBlogService>) -> ApiResult<Json<Vec<Blog>>> {
    svc.get_all_blogs().map(Json).map_err(service_err)
}

#[get("/blog/<blog_id>")]
pub fn get_blog(blog_id: i64, svc: &State<SharedBlogService>) -> ApiResult<Json<Blog>> {
    match svc.get_blog_by_id(blog_id).map_err(service_err)? {
        Some(blog) => Ok(Json(blog)),
        None => Err(not_found(blog_id)),
    }
}

#[put("/blog", format = "json", data = "<blog>")]
pub fn update_blog(blog: Json<Blog>, rid: RequestId, svc: &State<SharedBlogService>) -> ApiResult<Json<Blog>> {
    let updated = svc.update_blog(blog.into_inner()).map_err(service_err)?;
    tracing::info!(request_id = %rid.0, blog_id = updated.blog_id, "blog updated");
    Ok(Json(updated))
}

#[delete("/blog/<blog_id>")]
pub fn delete_blog(blog_id: i64, rid: RequestId, svc: &State<SharedBlogService>) -> ApiResult<Json<Blog>> {
    let deleted = svc.delete_blog(blog_id).map_err(service_err)?;
    tracing::info!(request_id = %rid.0, blog_id, "blog deleted");
    Ok(Json(deleted))
}

// ─── Catchers ───

#[catch(400)]
pub fn bad_request() -> Json<CatcherError> {
    caught("Malformed request body", "BAD_REQUEST")
}

#[catch(404)]
pub fn unknown_route() -> Json<CatcherError> {
    caught("Not found", "NOT_FOUND")
}

#[catch(422)]
pub fn unprocessable() -> Json<CatcherError> {
    caught("Request could not be processed", "UNPROCESSABLE_ENTITY")
}

#[catch(500)]
pub fn internal_error() -> Json<CatcherError> {
    caught("Internal server error", "INTERNAL_ERROR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_passes_message_through() {
        let (status, body) = service_err(ServiceError::AlreadyExists("Blog with ID 1 already exists".to_string()));
        assert_eq!(status, Status::Conflict);
        assert_eq!(body, "Blog with ID 1 already exists");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found(2), (Status::NotFound, "Blog not found with id: 2".to_string()));
    }

    #[test]
    fn test_other_is_prefixed_once() {
        let (status, body) = service_err(ServiceError::Other("Some error occurred".to_string()));
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body, "An error occurred: Some error occurred");
    }
}
