//! Entity structs for the CRM records the handlers read and write.
//!
//! Field names carry `#[serde(rename = ...)]` attributes matching the
//! Salesforce REST API so records deserialize directly from query results.
//! Nullable CRM fields are `Option`.

mod account;
mod contact;
mod contact_role;
mod opportunity;
mod quote;
mod subscription;

pub use account::Account;
pub use contact::{Contact, NewContact};
pub use contact_role::ContactRole;
pub use opportunity::Opportunity;
pub use quote::Quote;
pub use subscription::Subscription;
