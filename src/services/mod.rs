// Service exports
pub mod matching;
pub mod store;

pub use matching::{MatchingError, MatchingService};
pub use store::{InMemoryMatchStore, InMemoryNeighborhoodStore, MatchSink, NeighborhoodSource, StoreError};
