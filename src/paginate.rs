use std::fmt;

use smol_str::{SmolStr, ToSmolStr};

use crate::writer::{FormatContext, FormatWriter};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Paginator {
    pub maybe_limit: Option<SmolStr>,
    pub maybe_offset: Option<u64>,
}

impl Paginator {
    pub fn limit(&mut self, limit: SmolStr) {
        self.maybe_limit = Some(limit);
    }

    pub fn offset(&mut self, offset: u64) {
        self.maybe_offset = Some(offset);
    }

    /// One-based page of `per_page` rows. Page zero is the first page.
    pub fn paginate(&mut self, page: u64, per_page: u64) {
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        self.maybe_limit = Some(per_page.to_smolstr());
        self.maybe_offset = Some(offset);
    }

    pub fn is_empty(&self) -> bool {
        self.maybe_limit.is_none()
    }
}

impl FormatWriter for Paginator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        // an offset alone is not rendered
        let Some(ref limit) = self.maybe_limit else {
            return Ok(());
        };
        write!(context.writer, "LIMIT {limit}")?;
        if let Some(offset) = self.maybe_offset {
            write!(context.writer, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

/// Anything accepted by `LIMIT`: a count or raw text such as `5, 10`.
pub trait IntoLimit {
    fn into_limit(self) -> SmolStr;
}

macro_rules! limit_display {
    ($($ty:ty),+) => {
        $(
            impl IntoLimit for $ty {
                fn into_limit(self) -> SmolStr {
                    self.to_smolstr()
                }
            }
        )+
    };
}

limit_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, &str, &String, String, SmolStr);
