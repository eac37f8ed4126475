use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

impl Error {
    /// HTTP status this error is reported with
    pub fn status(&self) -> Status {
        match self.error_type {
            ErrorType::InvalidCategory => Status::BadRequest,
            ErrorType::InvalidTarget => Status::NotFound,
            ErrorType::CannotReportYourself => Status::BadRequest,

            ErrorType::Forbidden => Status::Forbidden,
            ErrorType::NotAuthenticated => Status::Unauthorized,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::Conflict => Status::Conflict,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
        }
    }
}

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
