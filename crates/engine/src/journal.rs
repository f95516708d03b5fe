//! Event journal - optional line-delimited JSON log of a session
//!
//! When `ELEVATRIS_LOG_PATH` is set, every engine event and every line clear,
//! elevation and cascade is appended as one JSON object per line. A write
//! failure closes the journal; play continues without it.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use elevatris_core::types::GameEvent;
use serde::Serialize;

use crate::cascade::CascadeSummary;

/// One journal line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Event { event: GameEvent },
    Lines { lines: usize, score: u32, level: u32 },
    Elevation { accepted: bool },
    Cascade { summary: CascadeSummary },
}

#[derive(Serialize)]
struct Line<'a> {
    seq: u64,
    #[serde(flatten)]
    record: &'a JournalRecord,
}

pub struct EventJournal {
    out: Option<Box<dyn Write>>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventJournal {
    /// A journal that drops everything
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    /// Append to the file at `path`, creating it if needed
    pub fn open(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    pub fn to_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, record: JournalRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let line = Line {
            seq: self.seq,
            record: &record,
        };
        if serde_json::to_writer(&mut self.buf, &line).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() {
            self.out = None;
            return;
        }
        self.seq += 1;
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for EventJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventJournal")
            .field("enabled", &self.is_enabled())
            .field("seq", &self.seq)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_records_are_json_lines() {
        let buf = SharedBuf::default();
        let mut journal = EventJournal::to_writer(buf.clone());

        journal.record(JournalRecord::Event {
            event: GameEvent::LevelUp { level: 3 },
        });
        journal.record(JournalRecord::Elevation { accepted: false });

        let text = String::from_utf8(buf.0.borrow().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["seq"], 0);
        assert_eq!(first["type"], "event");
        assert_eq!(first["event"]["event"], "level_up");
        assert_eq!(first["event"]["level"], 3);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["seq"], 1);
        assert_eq!(second["accepted"], false);
    }

    #[test]
    fn test_write_failure_disables_journal() {
        let mut journal = EventJournal::to_writer(FailingWriter);
        assert!(journal.is_enabled());
        journal.record(JournalRecord::Elevation { accepted: true });
        assert!(!journal.is_enabled());
        assert_eq!(journal.seq(), 0);
    }

    #[test]
    fn test_disabled_journal_ignores_records() {
        let mut journal = EventJournal::disabled();
        journal.record(JournalRecord::Elevation { accepted: true });
        journal.flush();
        assert_eq!(journal.seq(), 0);
    }
}
