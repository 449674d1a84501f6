use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Lifetime of tokens issued by login and signup.
pub const TOKEN_TTL_DAYS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn generate_token(user_id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        user_id: user_id.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

#[cfg(test)]
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_with_one_day_expiry() {
        let token = generate_token("65a1f0c2e4b0a1b2c3d4e5f6", "s3cret").unwrap();
        let claims = validate_token(&token, "s3cret").unwrap();

        assert_eq!(claims.user_id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token("65a1f0c2e4b0a1b2c3d4e5f6", "s3cret").unwrap();
        assert!(validate_token(&token, "other").is_err());
    }
}
