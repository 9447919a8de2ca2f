mod broadcast;
mod hub;
mod named;
mod partitions;
mod registry;
mod topic;

pub use broadcast::BroadcastSubject;
pub use hub::TopicHub;
pub use named::{NamedObserver, Sink};
pub use registry::TopicRegistry;
pub use topic::Topic;
