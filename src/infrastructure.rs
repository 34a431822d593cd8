//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Notification and auth callback services

pub mod auth_handler;
pub mod cli;
pub mod config;
pub mod notifier;
pub mod tui;
