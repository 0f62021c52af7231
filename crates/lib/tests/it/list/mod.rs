//! LinkedList integration tests
//!
//! Tests are organized by concern: construction and size, positional
//! insertion and removal, value lookup, rendering, the properties every
//! operation sequence must preserve, and serialization.

mod rendering;
