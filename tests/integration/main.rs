//! In-process integration tests for the Aklatan router

mod store_tests;
