//! Unit tests for all vx-tensor modules

mod tensor_tests;
