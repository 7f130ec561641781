pub mod dynamo;
pub mod entity;
pub mod keys;
pub mod memory;
pub mod repository;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;
pub use repository::SubscriptionRepository;
