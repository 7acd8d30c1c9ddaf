//! LINE webhook signature verification.
//!
//! LINE signs every webhook delivery with HMAC-SHA256 over the raw request
//! body using the channel secret, and sends the base64-encoded digest in
//! the `X-Line-Signature` header.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Errors from webhook signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Missing X-Line-Signature header")]
    MissingHeader,

    #[error("Signature is not valid base64")]
    MalformedSignature,

    #[error("Signature verification failed")]
    InvalidSignature,
}

/// Verifier for LINE webhook signatures.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: String,
}

impl SignatureVerifier {
    /// Creates a new verifier with the given channel secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verifies the header value against the raw request body.
    ///
    /// # Errors
    ///
    /// - `MalformedSignature` - header is not valid base64
    /// - `InvalidSignature` - digest does not match the body
    pub fn verify(&self, body: &[u8], signature_header: &str) -> Result<(), SignatureError> {
        let claimed = BASE64
            .decode(signature_header)
            .map_err(|_| SignatureError::MalformedSignature)?;

        let expected = self.compute_signature(body);

        if !constant_time_compare(&expected, &claimed) {
            return Err(SignatureError::InvalidSignature);
        }

        Ok(())
    }

    /// Computes HMAC-SHA256 over the raw body.
    fn compute_signature(&self, body: &[u8]) -> Vec<u8> {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key");
        mac.update(body);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a base64 signature for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, body: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}
