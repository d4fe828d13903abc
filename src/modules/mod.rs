pub mod auth;
pub mod chat;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

pub use self::auth::model::LoginRequest;
pub use self::users::model::User;
