use serde::Deserialize;

use crate::domain::entities::employee::Employee;
use crate::usecase::ports::source::FetchError;

#[derive(Debug, Deserialize)]
struct UsersPayload {
    users: Vec<Employee>,
}

/// Decodes `{ "users": [...] }`. Unknown fields are ignored; any malformed
/// element rejects the whole payload.
pub fn decode_users(body: &str) -> Result<Vec<Employee>, FetchError> {
    let payload: UsersPayload = serde_json::from_str(body)?;
    Ok(payload.users)
}
