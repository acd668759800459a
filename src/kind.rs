use std::fmt;

use crate::writer::{FormatContext, FormatWriter};

/// The statement being assembled. Set once per [`crate::Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Select,
    Insert,
    Update,
    Delete,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Select => "SELECT",
            Kind::Insert => "INSERT",
            Kind::Update => "UPDATE",
            Kind::Delete => "DELETE",
        }
    }

    /// Whether the table clause uses `FROM`.
    pub(crate) fn reads_from(&self) -> bool {
        matches!(self, Kind::Select | Kind::Delete)
    }

    pub(crate) fn accepts_values(&self) -> bool {
        matches!(self, Kind::Insert | Kind::Update)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatWriter for Kind {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Kind::Select => context.writer.write_str("SELECT "),
            Kind::Insert => context.writer.write_str("INSERT INTO "),
            Kind::Update => context.writer.write_str("UPDATE "),
            Kind::Delete => context.writer.write_str("DELETE "),
        }
    }
}
