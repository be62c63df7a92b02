//! Service-level tests
