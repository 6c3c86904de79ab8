/// Error value returned when reading from a container that holds no elements.
///
/// Every removal and peek on `RingBuffer`, `Queue` and `Stack` reports this
/// instead of handing back a default value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, thiserror::Error)]
pub enum Error {
    /// The container has no live elements.
    #[error("container is empty")]
    EmptyContainer,
}

/// Result alias for container operations.
pub type Result<T> = core::result::Result<T, Error>;
