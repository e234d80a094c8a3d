mod frontier;
mod priority_queue_frontier;
mod stack_frontier;

pub use frontier::Frontier;
pub use priority_queue_frontier::PriorityQueueFrontier;
pub use stack_frontier::StackFrontier;
