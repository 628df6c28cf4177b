use crate::{
    database::{MongoDB, USERS},
    models::{SignUpRequest, User, UserResponse},
    utils::{now_bson, AppError},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

pub const EMAIL_TAKEN: &str = "Email already registered";

/// Registers a user. The email check and the insert are two separate round
/// trips, so concurrent signups with the same email can both get through.
pub async fn sign_up(db: &MongoDB, request: SignUpRequest) -> Result<(), AppError> {
    let users = db.collection::<User>(USERS);

    let existing = db
        .collection::<Document>(USERS)
        .find_one(doc! { "email": &request.email })
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let user = User {
        id: None,
        username: request.username,
        email: request.email,
        password: request.password,
        created_at: now_bson(),
    };

    users.insert_one(&user).await?;

    Ok(())
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let cursor = db.collection::<User>(USERS).find(doc! {}).await?;
    let users: Vec<User> = cursor.try_collect().await?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}
