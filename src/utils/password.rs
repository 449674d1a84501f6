use crate::errors::AppError;
use actix_web::web;

/// Hashes on the blocking pool; bcrypt is deliberately slow.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    web::block(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Unexpected(e.to_string()))?
        .map_err(|e| AppError::Unexpected(e.to_string()))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    web::block(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Unexpected(e.to_string()))?
        .map_err(|e| AppError::Unexpected(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn hash_then_verify() {
        let hash = hash_password("hunter22".to_string(), 4).await.unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("hunter22".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("hunter23".to_string(), hash).await.unwrap());
    }

    #[actix_web::test]
    async fn garbage_hash_is_an_error() {
        assert!(verify_password("hunter22".to_string(), "not-a-hash".to_string()).await.is_err());
    }
}
