/*
[INPUT]:  Integration credentials and authentication mode
[OUTPUT]: Authenticator token lifecycle
[POS]:    Auth layer - token acquisition and memoization
[UPDATE]: When the authentication flow changes
*/

pub mod manager;

pub use manager::{AuthManager, AuthMode};
