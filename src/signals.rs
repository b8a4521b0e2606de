//! Typed cross-component signals.
//!
//! Components elsewhere in the calendar (modals, the sidebar) talk to day
//! columns without holding references to them. A modal that cancels an
//! in-flight creation publishes [`CalendarSignal::DragCancel`]; a sidebar
//! action that pre-fills a slot publishes [`CalendarSignal::ShowSelection`].
//!
//! Publishing only enqueues. Each column drains its [`Subscription`] from
//! [`crate::DayColumn::process_signals`], so delivery is asynchronous
//! relative to the gesture being cancelled.

use crate::types::DateTimeSelection;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

/// Messages a day column reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarSignal {
    /// Force-cancel any in-flight session and hide external previews
    DragCancel,
    /// Render a non-interactive preview in the column showing this date
    ShowSelection(DateTimeSelection),
    /// Hide an external preview without touching live sessions
    ClearSelection,
}

impl CalendarSignal {
    /// Event name used when bridging to a browser `window` event.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::DragCancel => "calendar-drag-cancel",
            Self::ShowSelection(_) => "calendar-show-selection",
            Self::ClearSelection => "calendar-clear-selection",
        }
    }
}

type Queue = Arc<Mutex<VecDeque<CalendarSignal>>>;

/// Broadcast bus; cloning yields another handle to the same bus.
#[derive(Debug, Clone, Default)]
pub struct SignalBus {
    subscribers: Arc<Mutex<Vec<Weak<Mutex<VecDeque<CalendarSignal>>>>>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `signal` for every live subscription.
    /// Returns the number of subscriptions it reached.
    pub fn publish(&self, signal: CalendarSignal) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|weak| weak.strong_count() > 0);

        let mut delivered = 0;
        for queue in subscribers.iter().filter_map(Weak::upgrade) {
            queue.lock().push_back(signal.clone());
            delivered += 1;
        }
        tracing::debug!(signal = signal.event_name(), delivered, "Published calendar signal");
        delivered
    }

    pub fn subscribe(&self) -> Subscription {
        let queue: Queue = Arc::default();
        self.subscribers.lock().push(Arc::downgrade(&queue));
        Subscription { queue }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Receiving end of a [`SignalBus`]; unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    queue: Queue,
}

impl Subscription {
    /// Take every queued signal, oldest first.
    pub fn drain(&self) -> Vec<CalendarSignal> {
        self.queue.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
