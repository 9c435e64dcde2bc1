pub mod session;
pub mod types;

mod filter;
mod row;
mod scratch;
mod value;


pub use session::EncoderSession;
pub use types::{
    AttrLen, ChangeEvent, ColumnDescriptor, Lsn, RelationRef, RowImage, TupleValue,
    EPOCH_OFFSET_USECS,
};
pub use value::UNCHANGED_SENTINEL;
