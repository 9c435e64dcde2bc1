pub mod catalog;
pub mod config;
pub mod error;
pub mod transport;

pub mod encoder;

pub use catalog::{Catalog, FixedCatalog, Publication};
pub use config::{EncoderOptions, StartupPhase};
pub use encoder::{
    AttrLen, ChangeEvent, ColumnDescriptor, EncoderSession, Lsn, RelationRef, RowImage,
    TupleValue, EPOCH_OFFSET_USECS, UNCHANGED_SENTINEL,
};
pub use error::{Error, Result};
pub use transport::{MemoryTransport, Transport};
