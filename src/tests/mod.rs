//! Integration-style test suite, one file per concern

mod sequence_tests;
