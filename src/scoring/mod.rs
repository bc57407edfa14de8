// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field type (title vs. heading vs. content) dominates everything else. A
//! title hit with a weak score still sorts above a content hit with a strong
//! one; scores only order results within a field.

mod core;
pub mod ranking;

pub use self::core::*;
