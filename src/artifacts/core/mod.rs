//! Core utilities and shared types

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Collects the whole report in a minus pager and shows it once the run is over.
///
/// Each clone pushes into the same pager, so one clone can be handed out as the
/// project's writer while another is kept to call `show`.
#[derive(Clone, new)]
pub struct PagedOutput {
    pager: Pager,
}

impl PagedOutput {
    pub fn writer(&self) -> Box<dyn Write> {
        Box::new(self.clone())
    }

    /// Blocks until the user quits the pager.
    pub fn show(self) -> anyhow::Result<()> {
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Write for PagedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pager
            .push_str(String::from_utf8_lossy(buf))
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
