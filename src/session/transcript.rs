//! The chat transcript recorded during a session.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::clock::TIME_FORMAT;
use crate::error::SessionResult;
use crate::fs::Persistence;

/// Format of the creation timestamp embedded in chat log file names.
const FILENAME_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One logged chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    timestamp: NaiveDateTime,
    speaker: String,
    message: String,
}

impl TranscriptEntry {
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIME_FORMAT),
            self.speaker,
            self.message
        )
    }
}

/// Chat lines in the order they were typed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message verbatim, whatever it contains.
    pub fn append(&mut self, speaker: &str, timestamp: NaiveDateTime, message: &str) {
        self.entries.push(TranscriptEntry {
            timestamp,
            speaker: speaker.to_string(),
            message: message.to_string(),
        });
    }

    /// Discards every recorded line.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The chat log file contents: one newline-terminated line per entry.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    /// Appends the rendered transcript to a freshly named file in `dir`.
    ///
    /// The transcript itself is left untouched. Returns the path written.
    pub fn flush<'a, P: Persistence + ?Sized>(
        &self,
        persistence: &P,
        dir: &Path,
        participants: impl IntoIterator<Item = &'a str>,
        now: NaiveDateTime,
    ) -> SessionResult<PathBuf> {
        let path = dir.join(compute_filename(participants, now));
        persistence.append_to_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Builds a chat log file name such as `20240501_231500_Alice_Bob_logs.txt`.
///
/// Every participant is listed, whether or not they said anything. Two
/// flushes within the same wall-clock second with the same cast produce the
/// same name, and the second one appends to the first file.
pub fn compute_filename<'a>(
    participants: impl IntoIterator<Item = &'a str>,
    now: NaiveDateTime,
) -> String {
    let mut filename = now.format(FILENAME_TIME_FORMAT).to_string();
    for name in participants {
        filename.push('_');
        filename.push_str(name);
    }
    filename.push_str("_logs.txt");
    filename
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fs::LogFile;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_entry_display_format() {
        let mut transcript = Transcript::new();
        transcript.append("DioBrando", at(23, 22, 8), "Oh? You're approaching me?");

        assert_eq!(
            transcript.entries()[0].to_string(),
            "[23:22:08] DioBrando: Oh? You're approaching me?"
        );
    }

    #[test]
    fn test_append_keeps_message_verbatim() {
        let mut transcript = Transcript::new();
        transcript.append("Alice", at(1, 2, 3), "");
        transcript.append("Alice", at(1, 2, 4), "  spaced out  ");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].message(), "");
        assert_eq!(transcript.entries()[1].message(), "  spaced out  ");
        assert_eq!(transcript.entries()[1].to_string(), "[01:02:04] Alice:   spaced out  ");
    }

    #[test]
    fn test_render_is_newline_terminated_in_order() {
        let mut transcript = Transcript::new();
        transcript.append("Alice", at(12, 0, 0), "hi");
        transcript.append("Bob", at(12, 0, 5), "hello");

        assert_eq!(
            transcript.render(),
            "[12:00:00] Alice: hi\n[12:00:05] Bob: hello\n"
        );
    }

    #[test]
    fn test_render_empty_transcript() {
        assert_eq!(Transcript::new().render(), "");
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut transcript = Transcript::new();
        transcript.append("Alice", at(12, 0, 0), "msg1");
        transcript.append("Bob", at(12, 0, 1), "msg2");

        transcript.clear();

        assert!(transcript.is_empty());
        assert_eq!(transcript.render(), "");
    }

    #[test]
    fn test_compute_filename() {
        let name = compute_filename(["Alice", "Bob"], at(23, 15, 0));
        assert_eq!(name, "20240501_231500_Alice_Bob_logs.txt");
    }

    #[test]
    fn test_compute_filename_same_second_collides() {
        // Known limitation: names only have second granularity.
        let first = compute_filename(["Alice"], at(8, 0, 0));
        let second = compute_filename(["Alice"], at(8, 0, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_flush_writes_file_and_keeps_entries() {
        let temp_dir = TempDir::new().unwrap();
        let mut transcript = Transcript::new();
        transcript.append("Alice", at(12, 0, 0), "hi");

        let path = transcript
            .flush(&LogFile, temp_dir.path(), ["Alice"], at(12, 30, 0))
            .unwrap();

        assert_eq!(path, temp_dir.path().join("20240501_123000_Alice_logs.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[12:00:00] Alice: hi\n"
        );
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_flush_twice_in_same_second_appends() {
        let temp_dir = TempDir::new().unwrap();
        let mut transcript = Transcript::new();
        transcript.append("Alice", at(12, 0, 0), "hi");

        let first = transcript
            .flush(&LogFile, temp_dir.path(), ["Alice"], at(12, 30, 0))
            .unwrap();
        let second = transcript
            .flush(&LogFile, temp_dir.path(), ["Alice"], at(12, 30, 0))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            std::fs::read_to_string(&first).unwrap(),
            "[12:00:00] Alice: hi\n[12:00:00] Alice: hi\n"
        );
    }
}
