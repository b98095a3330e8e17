//! Small shared utilities: deterministic UUID generation and logger setup.

use std::cell::Cell;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Generates a deterministic sequence of v5 UUIDs from a namespace.
///
/// Each call hashes an incrementing counter under the namespace, so two
/// generators seeded with the same namespace produce the same sequence.
/// This keeps trade ids stable across replays of the same order flow.
#[derive(Debug)]
pub struct UuidGenerator {
    namespace: Uuid,
    counter: Cell<u64>,
}

impl UuidGenerator {
    /// Creates a generator scoped to `namespace`.
    #[must_use]
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: Cell::new(0),
        }
    }

    /// Returns the next UUID in the sequence.
    pub fn next(&self) -> Uuid {
        let count = self.counter.get();
        self.counter.set(count + 1);
        Uuid::new_v5(&self.namespace, &count.to_be_bytes())
    }
}

/// Installs a global `tracing` subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs.
pub fn setup_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
