//! # sl-sfdc
//!
//! Salesforce REST data access for Salesline.
//!
//! The [`CrmGateway`] trait is the seam every handler depends on: SOQL
//! queries, single-record reads, creates, updates, and object describes.
//! [`RestGateway`] is the production implementation over `reqwest`; tests
//! substitute an in-memory fixture implementation.

mod error;
mod gateway;
mod rest;
pub mod soql;

pub use error::SfdcError;
pub use gateway::CrmGateway;
pub use rest::RestGateway;
