// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyphpack`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the utilities are only compiled once.
//! - Tests over the bundled fixture font always run. Tests that render a system font return
//!   early when [`glyphpack_dev::test_font`] finds none. Everything else uses the synthetic
//!   font in `util`.
//! - For test naming, put the "topic" of the test at the start of the name, for example
//!   `output_replaces_stale_icons` rather than `replaces_stale_output_icons`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

#[macro_use]
mod util;
