//! Shared test utilities for gnc-store unit tests.
