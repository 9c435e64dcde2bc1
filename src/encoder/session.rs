//! The event framer: one synchronous call per change, producing one
//! complete JSON document (or none, when the publication filter skips it).

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, info, trace};

use super::filter::PublicationFilter;
use super::row::encode_row;
use super::scratch::Scratch;
use super::types::{ChangeEvent, RelationRef, RowImage, EPOCH_OFFSET_USECS};
use super::value::write_json_string;
use crate::catalog::Catalog;
use crate::config::{EncoderOptions, StartupPhase};
use crate::transport::Transport;
use crate::{Error, Result};

/// An encoding session.
///
/// Holds the session-scoped state the encoder needs between events: the
/// memoized publication scope and the scratch buffer. Everything else is
/// borrowed per call. The session is single-threaded and processes events
/// strictly in the order the engine delivers them.
pub struct EncoderSession<C, T> {
    catalog: C,
    transport: T,
    filter: PublicationFilter,
    scratch: Scratch,
}

impl<C: Catalog, T: Transport> EncoderSession<C, T> {
    /// Starts a session.
    ///
    /// A `Stream` startup without a publication name fails fast with a
    /// configuration error; a `Probe` startup defers the requirement until
    /// the first gated change.
    pub fn startup(
        catalog: C,
        transport: T,
        options: EncoderOptions,
        phase: StartupPhase,
    ) -> Result<Self> {
        if phase == StartupPhase::Stream && options.publication.is_none() {
            return Err(Error::Config("publication parameter missing".to_string()));
        }
        info!(publication = ?options.publication, "encoder session started");
        Ok(Self {
            catalog,
            transport,
            filter: PublicationFilter::new(options.publication),
            scratch: Scratch::new(),
        })
    }

    /// Encodes one change event and hands the finished text to the
    /// transport. Produces no output for row changes outside the
    /// publication. Errors are fatal to the session; nothing partial is
    /// ever written.
    pub fn frame(&mut self, event: ChangeEvent<'_>) -> Result<()> {
        match event {
            ChangeEvent::Begin { xid, commit_time } => {
                let committed = commit_time + EPOCH_OFFSET_USECS;
                let when = chrono::DateTime::from_timestamp_micros(committed)
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| committed.to_string());
                trace!(xid, committed = %when, "begin");

                let mut out = self.scratch.scope();
                let _ = write!(out, "{{\"kind\":\"begin\",\"committed\":\"{}\"}}", committed);
                self.transport.write(&out)
            }
            ChangeEvent::Commit { xid, end_lsn } => {
                trace!(xid, lsn = %end_lsn, "commit");
                self.transport.write("{\"kind\":\"commit\"}")
            }
            ChangeEvent::Insert { xid, relation, new } => {
                self.change(xid, relation, "insert", None, Some(&new))
            }
            ChangeEvent::Update {
                xid,
                relation,
                old,
                new,
            } => self.change(xid, relation, "update", old.as_ref(), new.as_ref()),
            ChangeEvent::Delete { xid, relation, old } => {
                self.change(xid, relation, "delete", Some(&old), None)
            }
            ChangeEvent::Truncate { xid, relations } => {
                trace!(xid, count = relations.len(), "truncate");
                self.transport.write("{\"kind\":\"truncate\"}")
            }
            ChangeEvent::Message {
                lsn,
                transactional,
                prefix,
                content,
            } => {
                trace!(%lsn, prefix = %prefix, transactional, size = content.len(), "message");

                let mut out = self.scratch.scope();
                out.push_str(if transactional {
                    "{\"kind\":\"xmessage\""
                } else {
                    "{\"kind\":\"message\""
                });
                out.push_str(",\"prefix\":");
                write_json_string(&mut out, &prefix);
                out.push_str(",\"content\":\"");
                out.push_str(&STANDARD.encode(&content));
                out.push_str("\"}");
                self.transport.write(&out)
            }
        }
    }

    fn change(
        &mut self,
        xid: u32,
        relation: &RelationRef,
        kind: &str,
        old: Option<&RowImage>,
        new: Option<&RowImage>,
    ) -> Result<()> {
        if !self.filter.is_visible(&self.catalog, relation.id)? {
            trace!(xid, relation = %relation.name, "relation not in publication, skipped");
            return Ok(());
        }
        let namespace = self.catalog.namespace_of(relation.id)?;
        trace!(xid, schema = %namespace, relation = %relation.name, kind, "change");

        let mut out = self.scratch.scope();
        out.push_str("{\"kind\":\"");
        out.push_str(kind);
        out.push_str("\",\"schema\":");
        write_json_string(&mut out, &namespace);
        out.push_str(",\"table\":");
        write_json_string(&mut out, &relation.name);
        if let Some(row) = old {
            out.push_str(",\"oldtuple\":");
            encode_row(&mut out, relation, row)?;
        }
        if let Some(row) = new {
            out.push_str(",\"newtuple\":");
            encode_row(&mut out, relation, row)?;
        }
        out.push('}');
        self.transport.write(&out)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    pub(crate) fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    /// Ends the session, dropping cached publication scope and scratch
    /// memory. Consuming `self` guarantees no event is framed afterwards.
    /// Returns the transport to the host.
    pub fn shutdown(self) -> T {
        debug!("encoder session shut down");
        self.transport
    }
}
