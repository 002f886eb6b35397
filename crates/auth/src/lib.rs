//! `projectmgr-auth` — authentication/authorization boundary.
//!
//! This crate is decoupled from HTTP and storage: it validates tokens and
//! answers "may this principal reach this route", nothing more.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;

pub use authorize::{Access, AuthzError, authorize};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use principal::PrincipalId;
pub use roles::Role;
