use std::fmt;

use bytes::Bytes;

/// Microseconds between the Unix epoch and the storage engine's 2000-01-01
/// epoch. Commit times arrive in engine-epoch microseconds and are shifted
/// onto the Unix epoch on output.
pub const EPOCH_OFFSET_USECS: i64 = 946_684_800_000_000;

/// An opaque, monotonic position in the change stream. Only the transport
/// orders by it; the encoder never reinterprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lsn(pub u64);

impl fmt::Display for Lsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}/{:X}", self.0 >> 32, self.0 & 0xFFFF_FFFF)
    }
}

/// Whether a column's storage representation is fixed-width and in-line or
/// variable-length and potentially out-of-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrLen {
    Fixed(u16),
    Variable,
}

/// One attribute of a relation.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub name: String,
    /// 1-based attribute position, stable for the relation's lifetime.
    /// Dropped and generated columns keep their position even though they
    /// are never emitted.
    pub position: i16,
    pub type_id: u32,
    pub len: AttrLen,
    pub dropped: bool,
    pub generated: bool,
}

impl ColumnDescriptor {
    pub fn new(name: &str, position: i16, type_id: u32, len: AttrLen) -> Self {
        Self {
            name: name.to_string(),
            position,
            type_id,
            len,
            dropped: false,
            generated: false,
        }
    }
}

/// A source relation as the catalog describes it. The catalog owns this;
/// the encoder borrows it for the duration of one call. The schema name is
/// resolved separately through the catalog.
#[derive(Debug, Clone)]
pub struct RelationRef {
    pub id: u32,
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// One column's value within a row image.
#[derive(Debug, Clone)]
pub enum TupleValue {
    /// SQL NULL.
    Null,
    /// An out-of-line value the engine did not re-send because it is
    /// unchanged. Distinct from `Null` on the wire.
    Unchanged,
    /// The native text representation of a present value.
    Text(Bytes),
}

impl TupleValue {
    pub fn text(value: &str) -> Self {
        Self::Text(Bytes::copy_from_slice(value.as_bytes()))
    }
}

/// One physical row version, parallel to the relation's column list.
/// Dropped and generated columns still occupy their slot.
#[derive(Debug, Clone)]
pub struct RowImage(pub Vec<TupleValue>);

/// A change handed to the encoder by the replication engine, consumed
/// within a single call.
#[derive(Debug, Clone)]
pub enum ChangeEvent<'a> {
    Begin {
        xid: u32,
        /// Engine-epoch microseconds.
        commit_time: i64,
    },
    Commit {
        xid: u32,
        end_lsn: Lsn,
    },
    Insert {
        xid: u32,
        relation: &'a RelationRef,
        new: RowImage,
    },
    Update {
        xid: u32,
        relation: &'a RelationRef,
        /// Present only if the relation's replica identity captures the
        /// old row.
        old: Option<RowImage>,
        new: Option<RowImage>,
    },
    Delete {
        xid: u32,
        relation: &'a RelationRef,
        old: RowImage,
    },
    Truncate {
        xid: u32,
        relations: Vec<u32>,
    },
    /// An out-of-band message written into the change stream.
    Message {
        lsn: Lsn,
        /// Whether the message follows the enclosing transaction's
        /// visibility rules.
        transactional: bool,
        prefix: String,
        content: Bytes,
    },
}
