//! Terminal input plus the tick and frame clocks, merged into one channel
//! by a background tokio task.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// New terminal size as (cols, rows).
    Resize(u16, u16),
    /// Housekeeping clock: debounce deadlines, toast and copy-mark expiry.
    Tick,
    /// Redraw clock.
    Render,
}

/// How often the reader emits [`Event::Tick`] and [`Event::Render`].
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    pub tick: Duration,
    pub frame: Duration,
}

impl Default for Cadence {
    /// 50 ms ticks keep the 200 ms search debounce responsive; frames at
    /// roughly 30 per second.
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            frame: Duration::from_millis(33),
        }
    }
}

/// Key presses and resizes. Releases, repeats, mouse and paste are dropped.
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

fn clock(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown: CancellationToken,
}

impl EventReader {
    pub fn spawn(cadence: Cadence) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        tokio::spawn(pump(tx, shutdown.clone(), cadence));
        Self { rx, shutdown }
    }

    /// `None` once the background task has exited.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, shutdown: CancellationToken, cadence: Cadence) {
    let mut input = EventStream::new();
    let mut tick = clock(cadence.tick);
    let mut frame = clock(cadence.frame);

    loop {
        let event = tokio::select! {
            () = shutdown.cancelled() => break,
            _ = tick.tick() => Event::Tick,
            _ = frame.tick() => Event::Render,
            next = input.next() => match next {
                Some(Ok(raw)) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(err)) => {
                    warn!(error = %err, "failed to read terminal event");
                    continue;
                }
                None => {
                    warn!("terminal event stream closed");
                    break;
                }
            },
        };

        if tx.send(event).is_err() {
            break;
        }
    }
    debug!("event reader stopped");
}
