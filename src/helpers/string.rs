//! String helpers
//!
//! - AES-256-GCM encryption of secrets kept in the local config file
//! - URL slug generation for catalog entries

use crate::error::{Error, Result};
use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Key for secrets stored in `storefront-admin.toml`.
///
/// Only keeps the API key from sitting in the file as plain text.
const MASTER_KEY: &[u8; 32] = b"StorefrontAdminConsoleSecret#26!";

const NONCE_LEN: usize = 12;

/// Encrypt `plain_text`, returning base64 of `[nonce][ciphertext]`
pub fn encrypt(plain_text: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(MASTER_KEY.into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plain_text.as_bytes())
        .map_err(|e| Error::Invalid {
            message: format!("Encryption failed: {e}"),
        })?;

    let mut combined = nonce.to_vec();
    combined.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(combined))
}

/// Reverse of [`encrypt`]
pub fn decrypt(cipher_text: &str) -> Result<String> {
    let data = BASE64.decode(cipher_text).map_err(|e| Error::Invalid {
        message: format!("Base64 decode failed: {e}"),
    })?;

    if data.len() < NONCE_LEN {
        return Err(Error::Invalid {
            message: "Ciphertext too short".to_string(),
        });
    }

    let cipher = Aes256Gcm::new(MASTER_KEY.into());
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::<Aes256Gcm>::from_slice(nonce_bytes);

    let plaintext = cipher.decrypt(nonce, ciphertext).map_err(|e| Error::Invalid {
        message: format!("Decryption failed: {e}"),
    })?;

    String::from_utf8(plaintext).map_err(|e| Error::Invalid {
        message: format!("UTF-8 decode failed: {e}"),
    })
}

/// Lowercase, ASCII-alphanumeric words joined by single hyphens.
///
/// `"  Wall Art & Prints "` becomes `"wall-art-prints"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Mask all but the last four characters of a secret for display
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "•".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "•".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_encrypt_decrypt() {
        let encrypted = encrypt("sk_live_123").expect("Encryption failed");
        assert_eq!(decrypt(&encrypted).expect("Decryption failed"), "sk_live_123");
    }

    #[test]
    fn test_encrypt_uses_fresh_nonce() {
        assert_ne!(encrypt("k").unwrap(), encrypt("k").unwrap());
    }

    #[test]
    fn test_decrypt_rejects_garbage() {
        assert!(decrypt("not_valid_base64!!!").is_err());
        assert!(decrypt("AQIDBA==").is_err());
    }

    #[rstest]
    #[case("Wall Art", "wall-art")]
    #[case("  Wall Art & Prints ", "wall-art-prints")]
    #[case("T-Shirts", "t-shirts")]
    #[case("Café 2024", "caf-2024")]
    #[case("---", "")]
    fn test_slugify(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdef12"), "••••ef12");
        assert_eq!(mask_secret("abc"), "•••");
    }
}
