//! Unit tests for SMS module

pub mod support;

mod create_service_tests;
