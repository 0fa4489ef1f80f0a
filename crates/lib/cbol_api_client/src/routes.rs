//! Backend endpoint paths, relative to the configured base path.

pub const POST_AUTH_LOGIN: &str = "/auth/login";
pub const GET_AUTH_ME: &str = "/auth/me";
pub const PUT_AUTH_ME: &str = "/auth/me";
pub const DELETE_AUTH_ME: &str = "/auth/me";
pub const POST_AUTH_ME_VERIFY: &str = "/auth/me/verify";
pub const PUT_AUTH_ME_PASSWORD: &str = "/auth/me/password";
pub const GET_AUTH_USERS: &str = "/auth/users";
pub const POST_AUTH_REGISTER: &str = "/auth/register";
/// Followed by `/{username}`.
pub const PUT_AUTH_MODIFY: &str = "/auth/modify";
pub const PUT_AUTH_RESIGN: &str = "/auth/resign";
