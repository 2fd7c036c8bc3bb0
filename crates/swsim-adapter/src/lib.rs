/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SWSIM adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod wire;

// Re-export commonly used types from auth
pub use auth::{AuthManager, AuthMode};

// Re-export commonly used types from http
pub use http::{
    CallSpec,
    ClientConfig,
    Fault,
    HttpTransport,
    MockTransport,
    Operation,
    RawResponse,
    Result,
    SoapTransport,
    SwsResponse,
    SwsimClient,
    SwsimError,
};

// Re-export all types
pub use types::*;

// Re-export the mapping engine surface
pub use wire::{ToWire, WireStruct, WireValue};
