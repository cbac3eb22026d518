#![forbid(unsafe_code)]

pub mod contact;
pub mod error;
pub mod loading;
pub mod profile;

pub use folio_core::Clock;

pub use contact::{
    ContactGateway, ContactReceipt, ContactService, HttpGateway, SimulatedGateway,
};
pub use error::{ContactGatewayError, ContactServiceError, ProfileServiceError};
pub use loading::ProgressDriver;
pub use profile::ProfileService;
