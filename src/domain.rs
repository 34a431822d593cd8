//! Domain logic
//!
//! This module contains the product rules of the auth screens:
//! - Route table and path normalisation
//! - Form models, focus order and validation
//! - Notifications and submitted credentials

pub mod credentials;
pub mod form;
pub mod notification;
pub mod route;
pub mod validation;
