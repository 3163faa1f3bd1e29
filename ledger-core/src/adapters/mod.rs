//! Adapter implementations
//!
//! Concrete storage behind the services.

pub mod memory;

pub use memory::MemoryRepository;
