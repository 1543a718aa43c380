use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Ephemeral signature material for one outbound courier call. Built fresh
/// per request and never persisted.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub timestamp: String,
    pub signature: String,
}

/// Canonical string the courier verifies the signature against. The blank
/// line is the (always empty) additional-headers segment of the scheme.
pub fn canonical_string(timestamp: &str, method: &str, path: &str, body: &str) -> String {
    format!("{timestamp}\r\n{method}\r\n{path}\r\n\r\n{body}")
}

pub fn hmac_sha256_hex(secret: &str, message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("hmac accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Signs `body` for `method path` with the current millisecond timestamp.
/// `body` must be the exact serialized text that will be transmitted.
pub fn sign(secret: &str, method: &str, path: &str, body: &str) -> SignedRequest {
    let timestamp = Utc::now().timestamp_millis().to_string();
    sign_at(secret, method, path, body, timestamp)
}

pub fn sign_at(
    secret: &str,
    method: &str,
    path: &str,
    body: &str,
    timestamp: String,
) -> SignedRequest {
    let canonical = canonical_string(&timestamp, method, path, body);
    let signature = hmac_sha256_hex(secret, &canonical);
    SignedRequest {
        timestamp,
        signature,
    }
}

pub fn authorization_header(api_key: &str, signed: &SignedRequest) -> String {
    format!("hmac {}:{}:{}", api_key, signed.timestamp, signed.signature)
}

#[cfg(test)]
mod tests {
    use super::{authorization_header, canonical_string, hmac_sha256_hex, sign_at};

    #[test]
    fn canonical_string_has_blank_header_segment() {
        let canonical = canonical_string("1700000000000", "POST", "/v3/quotations", "{\"a\":1}");
        assert_eq!(
            canonical,
            "1700000000000\r\nPOST\r\n/v3/quotations\r\n\r\n{\"a\":1}"
        );
    }

    #[test]
    fn hmac_matches_rfc4231_test_vector() {
        let digest = hmac_sha256_hex("Jefe", "what do ya want for nothing?");
        assert_eq!(
            digest,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn same_inputs_same_timestamp_is_deterministic() {
        let a = sign_at("secret", "POST", "/v3/orders", "{}", "1700000000000".to_string());
        let b = sign_at("secret", "POST", "/v3/orders", "{}", "1700000000000".to_string());
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.signature.len(), 64);
        assert!(a.signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn any_input_change_changes_the_signature() {
        let ts = || "1700000000000".to_string();
        let base = sign_at("secret", "POST", "/v3/orders", "{}", ts());

        let other_secret = sign_at("secret2", "POST", "/v3/orders", "{}", ts());
        let other_path = sign_at("secret", "POST", "/v3/quotations", "{}", ts());
        let other_body = sign_at("secret", "POST", "/v3/orders", "{\"a\":1}", ts());

        assert_ne!(base.signature, other_secret.signature);
        assert_ne!(base.signature, other_path.signature);
        assert_ne!(base.signature, other_body.signature);
    }

    #[test]
    fn authorization_header_format() {
        let signed = sign_at("s", "POST", "/v3/orders", "{}", "1234".to_string());
        let header = authorization_header("key-1", &signed);
        assert_eq!(header, format!("hmac key-1:1234:{}", signed.signature));
    }
}
