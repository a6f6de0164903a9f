use thiserror::Error;

/// Typed failures raised by the collections in this crate.
///
/// Looking up or removing an absent key is not an error; those operations
/// return `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// `min_entry` / `max_entry` on a sorted map with zero entries.
    #[error("sorted map is empty")]
    EmptyContainer,
    /// `Cursor::next` called after the last element.
    #[error("iteration has no more elements")]
    ExhaustedIteration,
    /// A hash probe visited every slot without finding a free one. The growth
    /// policy keeps this unreachable.
    #[error("probe sequence exhausted all {capacity} slots without a free slot")]
    ProbeExhausted { capacity: usize },
    #[error("list is empty")]
    EmptyList,
    #[error("invalid position {position} for list of size {size}")]
    InvalidPosition { position: usize, size: usize },
}
