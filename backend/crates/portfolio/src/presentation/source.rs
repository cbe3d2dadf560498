//! Event Sources
//!
//! Where replayed events come from. Implementations are polled until they
//! return `Ok(None)`.

use std::collections::VecDeque;
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::error::PageResult;
use crate::presentation::events::TimedEvent;

/// Event source trait
#[trait_variant::make(EventSource: Send)]
pub trait LocalEventSource {
    /// Next event, or `None` once the source is exhausted
    async fn next_event(&mut self) -> PageResult<Option<TimedEvent>>;
}

/// Pre-loaded events, replayed in `at_ms` order
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<TimedEvent>,
}

impl ScriptedEvents {
    /// Events with equal `at_ms` keep their relative order.
    pub fn new(events: impl IntoIterator<Item = TimedEvent>) -> Self {
        let mut events: Vec<TimedEvent> = events.into_iter().collect();
        events.sort_by_key(|e| e.at_ms);
        Self {
            queue: events.into(),
        }
    }

    /// Parse a JSON array of events
    pub fn from_json(json: &str) -> PageResult<Self> {
        let events: Vec<TimedEvent> = serde_json::from_str(json)?;
        Ok(Self::new(events))
    }

    pub async fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let script = Self::from_json(&json)?;
        tracing::debug!(path = %path.as_ref().display(), events = script.len(), "Event script loaded");
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    async fn next_event(&mut self) -> PageResult<Option<TimedEvent>> {
        Ok(self.queue.pop_front())
    }
}

/// JSON-lines events read from an async reader such as stdin.
///
/// Blank lines are skipped; a malformed line is returned as an error and
/// the next call continues with the following line.
#[derive(Debug)]
pub struct LineEvents<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: AsyncBufRead + Unpin> LineEvents<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: AsyncBufRead + Unpin + Send> EventSource for LineEvents<R> {
    async fn next_event(&mut self) -> PageResult<Option<TimedEvent>> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let event = TimedEvent::from_json(line).inspect_err(|e| {
                tracing::debug!(line = self.line_no, error = %e, "Unparseable event line");
            })?;
            return Ok(Some(event));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventSource, LineEvents, ScriptedEvents};
    use crate::error::PageError;
    use crate::presentation::events::{PageEvent, TimedEvent};

    #[test]
    fn test_scripted_events_sorted_stably() {
        let mut source = ScriptedEvents::from_json(
            r#"[
                {"at_ms": 200, "type": "load"},
                {"at_ms": 100, "type": "scroll", "y": 10},
                {"at_ms": 100, "type": "scroll", "y": 20}
            ]"#,
        )
        .unwrap();
        assert_eq!(source.len(), 3);

        let mut seen = Vec::new();
        while let Some(event) = tokio_test::block_on(source.next_event()).unwrap() {
            seen.push(event);
        }
        assert_eq!(
            seen,
            vec![
                TimedEvent::new(100, PageEvent::Scroll { y: 10.0 }),
                TimedEvent::new(100, PageEvent::Scroll { y: 20.0 }),
                TimedEvent::new(200, PageEvent::Load),
            ]
        );
        assert!(source.is_empty());
    }

    #[test]
    fn test_scripted_events_reject_non_array() {
        assert!(matches!(
            ScriptedEvents::from_json(r#"{"type": "load"}"#),
            Err(PageError::InvalidEvent(_))
        ));
    }

    #[tokio::test]
    async fn test_line_events_skip_blank_lines() {
        let input: &[u8] = b"{\"type\": \"load\"}\n\n   \n{\"at_ms\": 5, \"type\": \"keydown\", \"key\": \"Escape\"}\n";
        let mut source = LineEvents::new(input);

        let first = source.next_event().await.unwrap().unwrap();
        assert_eq!(first.event, PageEvent::Load);

        let second = source.next_event().await.unwrap().unwrap();
        assert_eq!(second.at_ms, 5);
        assert_eq!(source.line_no(), 4);

        assert!(source.next_event().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_line_events_continue_after_bad_line() {
        let input: &[u8] = b"not json\n{\"type\": \"load\"}\n";
        let mut source = LineEvents::new(input);

        assert!(matches!(
            source.next_event().await,
            Err(PageError::InvalidEvent(_))
        ));
        let event = source.next_event().await.unwrap().unwrap();
        assert_eq!(event.event, PageEvent::Load);
    }
}
