//! Integration-style tests that exercise the generator through its public API


mod timestamp_tests;
