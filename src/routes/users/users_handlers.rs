use actix_web::{web, HttpResponse};
use log::info;
use sqlx::AnyPool;

use super::users_models::CreateUserResponse;
use crate::db;
use crate::error::AppError;
use crate::models::user::{NewUser, User};

// List every user
pub async fn get_users(pool: web::Data<AnyPool>) -> Result<HttpResponse, AppError> {
    info!("Received request to list users");
    let users = db::list_users(pool.get_ref()).await?;
    info!("Returning {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

// Insert one user; uniqueness is left to the database
pub async fn create_user(
    pool: web::Data<AnyPool>,
    req: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
    let new_user = req.into_inner();
    info!("Received request to create user: {}", new_user.username);

    let id = db::insert_user(pool.get_ref(), &new_user).await?;
    let user = User {
        id,
        username: new_user.username,
        email: new_user.email,
    };
    info!("Created {} with id {}", user, user.id);

    Ok(HttpResponse::Created().json(CreateUserResponse {
        message: "User created successfully".into(),
        id,
    }))
}
