//! `ProjectService` implementations.

mod in_memory;

pub use in_memory::InMemoryProjectService;
