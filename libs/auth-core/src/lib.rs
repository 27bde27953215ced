//! Bearer token verification shared by every REST module
//!
//! Tokens are HS256 JWTs whose subject is the employee NIK. The server
//! layers an [`std::sync::Arc<TokenVerifier>`] extension onto the router;
//! handlers receive an [`AuthUser`] through the extractor and check the
//! role where an endpoint is admin-only.

pub mod claims;
pub mod extract;

pub use claims::{Claims, Role, TokenError, TokenVerifier};
pub use extract::AuthUser;
