//! Clipboard reader.
//!
//! The pipeline only depends on [`ClipboardSource`]; the OS clipboard lives
//! behind [`SystemClipboard`], which holds the handle in a scoped session.

mod system;

pub use system::SystemClipboard;

/// Source of the current clipboard text.
pub trait ClipboardSource {
    /// Current plain-text contents, or `None` when the clipboard holds no
    /// text (or cannot be opened).
    fn read_text(&mut self) -> Option<String>;
}

impl<T: ClipboardSource + ?Sized> ClipboardSource for &mut T {
    fn read_text(&mut self) -> Option<String> {
        (**self).read_text()
    }
}

/// Fixed clipboard contents, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard {
    text: Option<String>,
    /// Number of reads so far.
    pub reads: usize,
}

impl StaticClipboard {
    pub fn new(text: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            reads: 0,
        }
    }
}

impl ClipboardSource for StaticClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.reads += 1;
        self.text.clone()
    }
}
