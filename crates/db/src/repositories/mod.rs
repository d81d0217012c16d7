//! Repository structs, one per table. Each method takes the pool and borrows
//! a connection only for the duration of its own statement.

pub mod contact_repo;

pub use contact_repo::ContactRepo;
