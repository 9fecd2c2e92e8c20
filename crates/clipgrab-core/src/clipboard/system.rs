use arboard::Clipboard;

use super::ClipboardSource;

/// Open handle to the OS clipboard, scoped to a single read. The wrapped
/// `arboard::Clipboard` closes the platform handle in its own `Drop`, so
/// every exit path out of a read (text, no text, error) releases it.
struct ClipboardSession {
    inner: Clipboard,
}

impl ClipboardSession {
    fn open() -> Result<Self, arboard::Error> {
        let inner = Clipboard::new()?;
        tracing::trace!("clipboard opened");
        Ok(Self { inner })
    }

    fn text(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => {
                tracing::debug!("clipboard holds no text format");
                None
            }
            Err(e) => {
                tracing::warn!("clipboard read failed: {}", e);
                None
            }
        }
    }
}

/// The platform clipboard (Win32, NSPasteboard, X11 or Wayland).
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        let mut session = match ClipboardSession::open() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("could not open clipboard: {}", e);
                return None;
            }
        };
        session.text()
    }
}
