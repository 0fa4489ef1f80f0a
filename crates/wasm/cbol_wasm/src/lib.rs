//! Browser bindings for the console's pure helpers, so a web shell applies
//! the same rules as the native views.

use cbol_core::claims;
use cbol_core::forms::{self, PhoneInput};
use cbol_core::validation;
use wasm_bindgen::prelude::*;

/// Returns the version of the cbol_wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    cbol_core::version().to_string()
}

/// Password policy check.
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password(password: &str) -> bool {
    validation::validate_password(password)
}

/// Message for the first failed password-change rule, or `undefined` when
/// the change may be submitted.
#[wasm_bindgen(js_name = checkPasswordChange)]
pub fn check_password_change(current: &str, new: &str, confirm: &str) -> Option<String> {
    validation::check_password_change(current, new, confirm)
        .err()
        .map(|e| e.to_string())
}

/// Token claims as a JSON string, or `undefined` if the payload doesn't
/// decode.
#[wasm_bindgen(js_name = decodeClaims)]
pub fn decode_claims(token: &str) -> Option<String> {
    claims::decode_claims(token).and_then(|c| serde_json::to_string(&c).ok())
}

#[wasm_bindgen(js_name = deriveEmail)]
pub fn derive_email(username: &str) -> String {
    forms::derive_email(username)
}

#[wasm_bindgen(js_name = capitalizeFirst)]
pub fn capitalize_first(value: &str) -> String {
    forms::capitalize_first(value)
}

/// `010-{first}-{second}`.
#[wasm_bindgen(js_name = assemblePhone)]
pub fn assemble_phone(first: &str, second: &str) -> String {
    let mut phone = PhoneInput::default();
    phone.set_first(first);
    phone.set_second(second);
    phone.assemble()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_helpers_follow_core_rules() {
        assert!(validate_password("abc123$5"));
        assert!(!validate_password("abc12345"));
        assert_eq!(check_password_change("old$pass1", "abc123$5", "abc123$5"), None);
        assert!(check_password_change("old$pass1", "abc123$5", "nope").is_some());
    }

    #[test]
    fn claims_come_back_as_json() {
        // {"name":"Kim","role":"ADMIN"}
        let token = "x.eyJuYW1lIjoiS2ltIiwicm9sZSI6IkFETUlOIn0.y";
        let json = decode_claims(token).unwrap();
        assert_eq!(json, r#"{"name":"Kim","role":"ADMIN"}"#);
        assert_eq!(decode_claims("garbage"), None);
    }

    #[test]
    fn form_helpers() {
        assert_eq!(derive_email("jdoe"), "jdoe@cbol.com");
        assert_eq!(capitalize_first("minsu"), "Minsu");
        assert_eq!(assemble_phone("1234", "5678"), "010-1234-5678");
    }
}
