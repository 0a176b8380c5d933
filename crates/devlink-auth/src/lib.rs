//! # devlink-auth
//!
//! Authentication and authorization for DevLink.
//!
//! ## Modules
//!
//! - `jwt`: signed session token issuance and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `access`: per-resource access decisions

pub mod access;
pub mod jwt;
pub mod password;

pub use access::{AccessPolicy, Operation};
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
