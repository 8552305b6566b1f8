//! Property-based tests for the enforcement engine.
