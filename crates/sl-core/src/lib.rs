//! # sl-core
//!
//! Core types for Salesline.
//!
//! This crate provides the foundational types shared across all Salesline
//! crates:
//! - Entity structs for the CRM objects the handlers touch (opportunities,
//!   accounts, contacts, contact roles, quotes, subscriptions)
//! - The pipeline stage and check status enums
//! - Postal address struct with the human-readable rendering
//! - The renewal validation report and its aggregation rules
//! - Handler response types

pub mod address;
pub mod entities;
pub mod enums;
pub mod report;
pub mod responses;
