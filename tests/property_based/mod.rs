//! Property-based tests for specs and tensors

mod spec_property_tests;
