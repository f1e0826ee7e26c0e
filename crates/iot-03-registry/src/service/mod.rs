//! Application services: the Init/Invoke/Query facade and read-only lookups.

pub mod query;
pub mod registry;
