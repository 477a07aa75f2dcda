//! Netendencia - Digital Dependency Self-Assessment
//!
//! Users answer a questionnaire, get a three-tier dependency classification
//! with tailored recommendations, follow their history on a dashboard,
//! track their family and browse a directory of partner professionals.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
