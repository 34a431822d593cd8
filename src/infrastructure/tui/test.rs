use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use futures::future;
use ratatui::{backend::TestBackend, buffer::Buffer, prelude::*};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit are no-ops (no raw mode / alternate screen).
/// - next() returns events from an internal queue (non-blocking, immediate).
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    /// Expose draw count for tests.
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    /// Enqueue a single event for tests.
    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as plain text, one line per row
    pub fn screen_text(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        // no-op for test UI
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        // no-op for test UI
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_events_are_replayed_in_order() {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Render]).unwrap();

        assert!(matches!(tui.next().await, Some(Event::Tick)));
        assert!(matches!(tui.next().await, Some(Event::Render)));
        assert!(tui.next().await.is_none());
    }

    #[test]
    fn test_draw_counts_and_captures_text() {
        let mut tui = TestTui::new(5, 1).unwrap();
        tui.draw(&mut |f| f.render_widget(Paragraph::new("hi"), f.area()))
            .unwrap();

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_text(), "hi   ");
    }
}
