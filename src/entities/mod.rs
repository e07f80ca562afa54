//! Entity module - Contains the SeaORM entity definition for the storage
//! table. The registry persists its state as whole JSON blobs keyed by name,
//! so a single key-value entity covers all durable data.

pub mod storage_blob;

pub use storage_blob::{
    Column as StorageBlobColumn, Entity as StorageBlob, Model as StorageBlobModel,
};
