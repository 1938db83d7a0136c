//! Composite key test suite
//!
//! Tests for the stored key format and the key catalog.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Codec invariants** (framing, validation, split/build round-trip)
//! - **Tier 2: Property-based** (random object types and attributes)
//! - **Tier 3: Store contract** (prefix scans over a sorted store)
//! - **Tier 4: Catalog** (named shapes and their parsers)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test keys
//! ```

#[path = "../common/mod.rs"]
mod common;

mod catalog_invariants;
mod codec_properties;
