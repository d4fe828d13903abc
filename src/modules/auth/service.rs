use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, AuthUserData, LoginRequest, SignupRequest};

fn invalid_credentials() -> AppError {
    // Same message for unknown email and wrong password, so responses do
    // not reveal which accounts exist.
    AppError::unauthorized(anyhow::anyhow!("Invalid email or password"))
}

pub struct AuthService;

impl AuthService {
    /// Creates a buyer account and signs the caller in immediately.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn signup_user(
        db: &PgPool,
        dto: SignupRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let existing_user = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing_user.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        #[derive(sqlx::FromRow)]
        struct InsertedUser {
            id: Uuid,
            name: Option<String>,
            email: String,
            role: String,
        }

        // The role column defaults to 'buyer'; elevated accounts are only
        // ever provisioned through the CLI.
        let user = sqlx::query_as::<_, InsertedUser>(
            "INSERT INTO users (name, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, role",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // Covers the race where the same email signs up twice between
            // the existence check and the insert.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!("Email already registered"));
                }
            }
            AppError::from(e)
        })?;

        let role: UserRole = user.role.parse()?;
        let token = create_access_token(user.id, &user.email, role, jwt_config)?;

        Ok(AuthResponse {
            message: "Account created successfully".to_string(),
            token,
            user: AuthUserData {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: Option<String>,
            email: String,
            password: String,
            role: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, role FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(invalid_credentials)?;

        let is_valid = verify_password(&dto.password, &user.password)?;

        if !is_valid {
            return Err(invalid_credentials());
        }

        let role: UserRole = user.role.parse()?;
        let token = create_access_token(user.id, &user.email, role, jwt_config)?;

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            token,
            user: AuthUserData {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        })
    }
}
