use agora_result::{create_error, Error, Result};
use rocket::{catch, Catcher, Request};

#[catch(400)]
pub fn bad_request(req: &Request) -> Result<()> {
    match req.local_cache(|| None::<Error>) {
        Some(e) => Err(e.clone()),
        None => Err(create_error!(FailedValidation {
            error: "malformed request".to_string()
        })),
    }
}

#[catch(401)]
pub fn unauthorized(req: &Request) -> Result<()> {
    match req.local_cache(|| None::<Error>) {
        Some(e) => Err(e.clone()),
        None => Err(create_error!(NotAuthenticated)),
    }
}

#[catch(404)]
pub fn not_found() -> Result<()> {
    Err(create_error!(NotFound))
}

#[catch(422)]
pub fn unprocessable_entity() -> Result<()> {
    Err(create_error!(FailedValidation {
        error: "request body could not be parsed".to_string()
    }))
}

pub fn all_catchers() -> Vec<Catcher> {
    catchers![bad_request, unauthorized, not_found, unprocessable_entity]
}
