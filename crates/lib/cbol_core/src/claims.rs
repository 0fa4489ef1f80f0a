//! Session token payload reader.
//!
//! Pulls the display claims out of the middle segment of a compact JWT. No
//! signature or expiry check happens here; see [`Claims`].

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use log::warn;

use crate::models::auth::Claims;

/// URL-safe alphabet, padding optional (JWT segments are normally unpadded).
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the claims from `token`. Returns `None` for anything that isn't a
/// decodable payload; never panics.
pub fn decode_claims(token: &str) -> Option<Claims> {
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(reason) => {
            warn!("token claims unavailable: {reason}");
            None
        }
    }
}

fn try_decode(token: &str) -> Result<Claims, String> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing payload segment".to_string())?;

    let bytes = PAYLOAD_ENGINE
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("base64: {e}"))?;
    let text = String::from_utf8(bytes).map_err(|e| format!("utf-8: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("json: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    fn token_with(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_utf8_display_claims() {
        let token = token_with(&json!({
            "sub": "gdhong",
            "name": "홍길동",
            "englishname": "Gildong",
            "position": "대리",
            "role": "ADMIN",
            "exp": 1_700_000_000
        }));

        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.name, "홍길동");
        assert_eq!(claims.english_name.as_deref(), Some("Gildong"));
        assert_eq!(claims.position.as_deref(), Some("대리"));
        assert!(claims.is_admin());
    }

    #[test]
    fn accepts_padded_payload() {
        let header = URL_SAFE_NO_PAD.encode(b"{}");
        let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"name":"ab"}"#);
        assert!(body.ends_with('='));

        let claims = decode_claims(&format!("{header}.{body}.sig")).expect("claims");
        assert_eq!(claims.name, "ab");
    }

    #[test]
    fn payload_using_url_safe_characters_decodes() {
        // "??>" encodes to "Pz8-" which exercises the '-' substitution.
        let token = token_with(&json!({ "name": "??>", "role": "USER" }));
        assert!(token.contains('-'));
        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.name, "??>");
        assert!(!claims.is_admin());
    }

    #[test]
    fn null_and_non_string_display_claims_still_decode() {
        let token = token_with(&json!({ "name": null, "role": "ADMIN" }));
        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.name, "");
        assert!(claims.is_admin());

        let token = token_with(&json!({
            "name": 42,
            "englishname": null,
            "position": 3,
            "role": "USER"
        }));
        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.name, "42");
        assert_eq!(claims.english_name, None);
        assert_eq!(claims.position.as_deref(), Some("3"));
        assert!(!claims.is_admin());
    }

    #[test]
    fn malformed_inputs_yield_none() {
        for input in [
            "",
            "not-a-jwt",
            "a.b",
            "a..c",
            "a.!!!.c",
            &format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json")),
            &format!("h.{}.s", URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd])),
            &format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2,3]")),
        ] {
            assert_eq!(decode_claims(input), None, "input: {input:?}");
        }
    }
}
