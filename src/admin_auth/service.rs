use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject ("admin")
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

pub struct AdminAuthService {
    password_hash: String,
    jwt_secret: String,
    token_ttl: Duration,
}

impl AdminAuthService {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            password_hash: config.password_hash.clone(),
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: Duration::hours(config.token_ttl_hours),
        }
    }

    /// Verify the admin password and issue a JWT
    pub fn login(&self, password: &str) -> Result<String> {
        let parsed = PasswordHash::new(&self.password_hash)
            .map_err(|e| anyhow!("Invalid admin password hash in config: {}", e))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| anyhow!("Invalid password"))?;

        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            exp: (now + self.token_ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Validate a bearer token, returning its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(data.claims)
    }
}
