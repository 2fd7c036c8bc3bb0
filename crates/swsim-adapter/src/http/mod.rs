/*
[INPUT]:  Client configuration, wire payloads and raw responses
[OUTPUT]: Dispatched operations and normalized results
[POS]:    HTTP layer - dispatch, transport and classification
[UPDATE]: When adding operations or changing client behavior
*/

pub mod account;
pub mod address;
pub mod client;
pub mod error;
pub mod rates;
pub mod response;
pub mod soap;
pub mod stamps;
pub mod transport;

pub use client::{ClientConfig, SwsimClient};
pub use error::{Result, SwsimError};
pub use response::{Fault, RawResponse, SwsResponse};
pub use transport::{
    CallSpec, HttpTransport, MockTransport, Operation, RecordedCall, SoapTransport,
};
