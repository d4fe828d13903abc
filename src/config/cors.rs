use std::env;

/// Allowed browser origins for cross-origin requests.
///
/// # Environment Variables
///
/// - `CORS_ALLOWED_ORIGINS`: comma-separated list of origins. Defaults to
///   the local Vite dev server and the API's own origin.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:3000".to_string(),
                ]
            });

        Self { allowed_origins }
    }
}
