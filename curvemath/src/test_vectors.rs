//! Known-answer vectors for the named curves.

pub mod group;
