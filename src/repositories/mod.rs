pub mod dispatch_table;
pub mod local_repository;

pub use dispatch_table::Handler;
pub use local_repository::LocalRepository;
