//! Layer merging for the resolver.

pub mod merge_policy;
