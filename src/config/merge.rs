//! Merge rules for build description sources.

pub mod merge_policy;
