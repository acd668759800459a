use std::fmt::Write;

use crate::quote::Quote;

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) quoter: &'a dyn Quote,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, quoter: &'a dyn Quote) -> Self {
        Self { writer, quoter }
    }

    pub(crate) fn write_quoted(&mut self, raw: &str) -> std::fmt::Result {
        let quoted = self.quoter.quote(raw);
        self.writer.write_str(&quoted)
    }

    /// Write every item separated by `, `.
    pub(crate) fn write_list<'i, T, I>(&mut self, items: I) -> std::fmt::Result
    where
        T: FormatWriter + 'i,
        I: IntoIterator<Item = &'i T>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.writer.write_str(", ")?;
            }
            item.format_writer(self)?;
        }
        Ok(())
    }
}
