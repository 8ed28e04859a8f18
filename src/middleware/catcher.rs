use rocket::{serde::json::Json, response::status};
use crate::model::response::{ApiStatus, Response, ResponseWithStatus};
use crate::util::message;

fn respond(status: ApiStatus, message: &str) -> status::Custom<Json<Response>> {
    let r = ResponseWithStatus::new(status, message);
    status::Custom(r.status, Json(r.response))
}

#[catch(404)]
pub fn not_found() -> status::Custom<Json<Response>> {
    respond(ApiStatus::NotFound, message::MESSAGE_ROUTE_NOT_FOUND)
}

#[catch(500)]
pub fn internal_server_error() -> status::Custom<Json<Response>> {
    respond(ApiStatus::InternalServerError, message::MESSAGE_INTERNAL_SERVER_ERROR)
}
