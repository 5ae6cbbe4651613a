//! Request signing for business accounts.

mod signer;

pub use signer::{sign_url, RequestSigner};
