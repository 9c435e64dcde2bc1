use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options handed to the encoder by the host at session start.
///
/// The single recognized option is `publication`. It is required once real
/// event processing begins, but may be absent during the host's initial
/// probe of the output format (see [`StartupPhase`]).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EncoderOptions {
    pub publication: Option<String>,
}

impl EncoderOptions {
    /// Parses the host's raw option list.
    ///
    /// Unrecognized options are skipped; a repeated option takes the last
    /// value given.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut options = Self::default();
        for (name, value) in pairs {
            match name {
                "publication" => options.publication = value.map(str::to_owned),
                other => debug!(option = other, "ignoring unrecognized option"),
            }
        }
        options
    }
}

/// Which startup the host is performing.
///
/// `Probe` is the initial capability check, before any change is decoded;
/// the publication option is not yet required there. `Stream` starts real
/// event processing and fails fast without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPhase {
    Probe,
    Stream,
}
