/// Admission side of the lookup queue.
pub trait LookupQueuePort: Send + Sync {
    /// Try to enqueue one lookup without waiting. Returns false when the
    /// buffer is full or the queue has been stopped.
    fn submit(&self, address: &str) -> bool;

    fn is_running(&self) -> bool;

    fn capacity(&self) -> usize;

    /// Jobs admitted but not yet picked up by the worker.
    fn pending(&self) -> usize;
}
