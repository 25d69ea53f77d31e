//! Unit tests for the continuation token service

mod service_tests;
