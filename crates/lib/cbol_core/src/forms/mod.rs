//! Form helpers shared by the profile and user-management drafts.

pub mod identity;
pub mod phone;

pub use identity::{EMAIL_DOMAIN, IdentityFields, capitalize_first, derive_email};
pub use phone::{PHONE_PREFIX, PHONE_SEGMENT_LEN, PhoneField, PhoneInput};
