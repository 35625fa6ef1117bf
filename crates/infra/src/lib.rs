//! Infrastructure layer: snapshot persistence, the record store, and the
//! action dispatcher.

pub mod config;
pub mod dispatch;
pub mod persistence;
pub mod record_store;
pub mod seed;
pub mod snapshot;

pub use config::{PurchasingDefaults, StoreConfig};
pub use dispatch::{Action, DispatchError, Dispatched, Dispatcher};
pub use persistence::{InMemorySnapshotStore, JsonFileStore, SnapshotStore};
pub use record_store::RecordStore;
pub use snapshot::Snapshot;
