//! CORS configuration.

use actix_cors::Cors;

/// Cross-origin settings applied to every route.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<&'static str>,
    pub allowed_headers: Vec<&'static str>,
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"],
            allowed_headers: vec![
                "Content-Type",
                "Authorization",
                "X-Requested-With",
                "Accept",
                "Origin",
                "X-CSRF-Token",
            ],
            max_age: 86400,
        }
    }
}

impl CorsConfig {
    pub fn with_origins(allowed_origins: Vec<String>) -> Self {
        if allowed_origins.is_empty() {
            return Self::default();
        }
        Self {
            allowed_origins,
            ..Self::default()
        }
    }

    /// Build the actix middleware.
    pub fn build(&self) -> Cors {
        let mut cors = Cors::default()
            .allowed_methods(self.allowed_methods.iter().copied())
            .allowed_headers(self.allowed_headers.iter().copied())
            .max_age(self.max_age);

        if self.allowed_origins.iter().any(|o| o == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &self.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        cors
    }
}
