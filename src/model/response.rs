use rocket::http::Status;
use rocket::serde::{Deserialize, Serialize};

use std::fmt::{Display, Formatter, Result};
use crate::util::message;

/// Envelope returned when a request never reaches a profile route.
#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Response {
    pub status: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ResponseWithStatus {
    pub status: Status,
    pub response: Response,
}

#[derive(Debug, Clone, Copy)]
pub enum ApiStatus {
    NotFound,
    InternalServerError,
}

impl ApiStatus {
    pub fn code(&self) -> u16 {
        match self {
            ApiStatus::NotFound => 404,
            ApiStatus::InternalServerError => 500,
        }
    }
}

impl Display for ApiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ApiStatus::NotFound => write!(f, "{}", message::STATUS_NOT_FOUND),
            ApiStatus::InternalServerError => write!(f, "{}", message::STATUS_INTERNAL_SERVER_ERROR),
        }
    }
}

impl ResponseWithStatus {
    pub fn new(status: ApiStatus, message: &str) -> Self {
        ResponseWithStatus {
            status: Status::new(status.code()),
            response: Response {
                status: status.to_string(),
                message: message.to_string(),
            },
        }
    }
}
