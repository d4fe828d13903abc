use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, AuthUserData, LoginRequest, SignupRequest};
use crate::modules::chat::model::{ConversationSummary, ConversationsResponse};
use crate::modules::health::model::HealthResponse;
use crate::modules::orders::model::{
    CreateOrderRequest, Order, OrderResponse, OrderWithProduct, OrdersListResponse,
};
use crate::modules::products::model::{
    CreateProductRequest, Product, ProductDetailResponse, ProductFilterParams, ProductResponse,
    ProductsListResponse,
};
use crate::modules::users::model::{
    User, UserFilterParams, UserResponse, UserRole, UsersListResponse,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_me,
        crate::modules::users::controller::get_users,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::create_product,
        crate::modules::orders::controller::create_order,
        crate::modules::orders::controller::get_my_orders,
        crate::modules::chat::controller::get_my_conversations,
        crate::modules::chat::controller::get_conversations,
        crate::modules::health::controller::health_check,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserResponse,
            UsersListResponse,
            UserFilterParams,
            SignupRequest,
            LoginRequest,
            AuthResponse,
            AuthUserData,
            ErrorResponse,
            Product,
            CreateProductRequest,
            ProductResponse,
            ProductDetailResponse,
            ProductsListResponse,
            ProductFilterParams,
            Order,
            OrderWithProduct,
            CreateOrderRequest,
            OrderResponse,
            OrdersListResponse,
            ConversationSummary,
            ConversationsResponse,
            HealthResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Users", description = "Profiles and account administration"),
        (name = "Products", description = "Marketplace listings"),
        (name = "Orders", description = "Purchases"),
        (name = "Chat", description = "Buyer-seller conversations"),
        (name = "Health", description = "Service health probes")
    ),
    info(
        title = "Tradecart API",
        version = "0.1.0",
        description = "A marketplace REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        contact(
            name = "API Support",
            email = "support@tradecart.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
