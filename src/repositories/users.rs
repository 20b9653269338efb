use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use diesel::prelude::*;

use crate::errors::AppError;
use crate::models::user::{NewUser, User};
use crate::schema::users;

/// Insert a new user, hashing the plain-text password with Argon2 first.
/// A duplicate email surfaces as `AppError::Conflict` via the unique-violation
/// mapping in `errors`.
pub fn create_user(
    conn: &mut PgConnection,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();

    let user = diesel::insert_into(users::table)
        .values(&NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .returning(User::as_returning())
        .get_result(conn)?;

    Ok(user)
}

pub fn get_user_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Option<User>> {
    users::table
        .filter(users::id.eq(id))
        .select(User::as_select())
        .first(conn)
        .optional()
}
