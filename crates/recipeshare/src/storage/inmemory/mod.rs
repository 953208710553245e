mod repository;

pub use repository::InMemoryPostStore;
