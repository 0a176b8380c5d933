//! PostgreSQL repository implementations of the store traits.

pub mod resource;
pub mod user;

pub use resource::ResourceRepository;
pub use user::UserRepository;

/// Name of the partial unique index on `LOWER(email)` for active users.
pub(crate) const USERS_EMAIL_INDEX: &str = "users_email_active_key";

/// Build an `ILIKE` pattern that matches `value` as a literal substring.
///
/// `%`, `_` and `\` are escaped with `\`, the default escape character.
pub fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
