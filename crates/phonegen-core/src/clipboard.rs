// ── Clipboard ──
//
// Terminal clipboard writes via OSC 52 (`ESC ] 52 ; c ; <base64> BEL`).
// A failed copy is never fatal: callers log it and tell the user.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};

/// Largest encoded payload we emit; most terminals silently drop more.
pub const MAX_ENCODED_LEN: usize = 1 << 20;

/// Anything that can receive text for the system clipboard.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Build the OSC 52 escape sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// OSC 52 clipboard writing to any terminal stream.
#[derive(Debug)]
pub struct Osc52<W: Write> {
    out: W,
}

impl<W: Write> Osc52<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Osc52<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Clipboard for Osc52<W> {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        let sequence = osc52_sequence(text);
        if sequence.len() > MAX_ENCODED_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "clipboard payload too large ({} bytes encoded, limit {MAX_ENCODED_LEN})",
                    sequence.len()
                ),
            ));
        }
        self.out.write_all(sequence.as_bytes())?;
        self.out.flush()
    }
}

/// Copy `text`, logging the outcome. Returns whether the copy succeeded.
pub fn copy_logged(clipboard: &mut dyn Clipboard, text: &str, what: &str) -> bool {
    match clipboard.copy(text) {
        Ok(()) => {
            debug!(what, bytes = text.len(), "copied to clipboard");
            true
        }
        Err(err) => {
            warn!(what, error = %err, "clipboard write failed");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Broken;

    impl Clipboard for Broken {
        fn copy(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_writes_sequence_to_stream() {
        let mut clip = Osc52::new(Vec::new());
        clip.copy("+86 138 0000 0000").unwrap();
        let written = String::from_utf8(clip.into_inner()).unwrap();
        assert_eq!(written, osc52_sequence("+86 138 0000 0000"));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let mut clip = Osc52::new(Vec::new());
        let huge = "9".repeat(MAX_ENCODED_LEN);
        let err = clip.copy(&huge).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(clip.into_inner().is_empty());
    }

    #[test]
    fn copy_logged_reports_failure_without_panicking() {
        assert!(!copy_logged(&mut Broken, "x", "number"));
        assert!(copy_logged(&mut Osc52::new(Vec::new()), "x", "number"));
    }
}
