use std::env;

/// Runtime configuration, read once at startup.
///
/// `DATABASE_URL` is mandatory; everything else has a development default.
/// An absent `SECRET` degrades token signing to an empty key rather than
/// failing startup, so the composition root logs a warning when that happens.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// HMAC key for session tokens.
    pub jwt_secret: String,
    /// Front-end origin allowed by CORS, e.g. `http://localhost:3000`.
    pub frontend_origin: String,
    /// Domain attribute for the session and CSRF cookies. Empty means
    /// host-only cookies.
    pub cookie_domain: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            jwt_secret: env::var("SECRET").unwrap_or_default(),
            frontend_origin: env::var("FE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            cookie_domain: env::var("API_DOMAIN").unwrap_or_default(),
        }
    }

    pub fn server_addr(&self) -> (String, u16) {
        (self.server_host.clone(), self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("DATABASE_URL", "postgres://test");
        env::remove_var("SERVER_PORT");
        env::remove_var("SERVER_HOST");
        env::remove_var("SECRET");
        env::remove_var("FE_URL");
        env::remove_var("API_DOMAIN");

        let config = Config::from_env();

        assert_eq!(config.database_url, "postgres://test");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.jwt_secret, "");
        assert_eq!(config.frontend_origin, "http://localhost:3000");
        assert_eq!(config.cookie_domain, "");

        env::set_var("SERVER_PORT", "3000");
        env::set_var("SECRET", "supersecret");
        env::set_var("API_DOMAIN", "api.example.com");

        let config = Config::from_env();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.jwt_secret, "supersecret");
        assert_eq!(config.cookie_domain, "api.example.com");
    }
}
