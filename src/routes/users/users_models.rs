use serde::{Deserialize, Serialize};

// Create-user response; the request body is models::user::NewUser
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub id: i64,
}
