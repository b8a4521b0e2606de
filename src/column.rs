//! Day column - binds one rendered day to a selection session.
//!
//! `DayColumn` is the host-facing surface of the crate. The host forwards
//! column-level input (`pointer_down`, `double_click`, `touch_start`) for
//! every column, and global input (`pointer_move`, `pointer_up`,
//! `touch_move`, `touch_end`, `key_down`) only to the column that currently
//! owns the global listener set (see [`ListenerRegistry::owner`]).
//!
//! The handlers themselves live in `crate::input`; this module holds the
//! column state, construction, cancellation and the single cleanup routine
//! every terminal path goes through.

use crate::error::SettingsResult;
use crate::haptics::{Haptics, NoHaptics};
use crate::input::coords::{PreviewGeometry, format_drop_time, pixels_to_time, range_with_duration};
use crate::input::{CancelReason, GestureThresholds, SessionOutcome, SessionState, TouchTracker};
use crate::listeners::{ColumnId, ListenerGuard, ListenerRegistry};
use crate::overlap::{NoOverlapCheck, OverlapPolicy, PlanOverlap};
use crate::settings::SelectionSettings;
use crate::signals::{CalendarSignal, SignalBus, Subscription};
use crate::spatial_index::{BlockHit, BlockIndex};
use crate::types::{CalendarPlan, ColumnPoint, DateTimeSelection, TimePoint, TimeRange};
use chrono::NaiveDate;
use std::time::Instant;

/// Callback receiving a selection.
pub type SelectionCallback = Box<dyn FnMut(&DateTimeSelection)>;

/// Keys the column reacts to while a gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// What the host should draw as the selection block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPreview {
    pub range: TimeRange,
    pub geometry: PreviewGeometry,
    /// Rejected by the overlap policy
    pub invalid: bool,
    /// Shown by a `ShowSelection` signal rather than a live gesture
    pub external: bool,
}

/// Host surface adapter for one day column.
pub struct DayColumn {
    pub(crate) id: ColumnId,
    pub(crate) date: NaiveDate,
    pub(crate) settings: SelectionSettings,
    pub(crate) thresholds: GestureThresholds,
    pub(crate) hour_height: f32,
    pub(crate) disabled: bool,
    pub(crate) session: SessionState,
    pub(crate) touch: Option<TouchTracker>,
    pub(crate) listeners: ListenerRegistry,
    pub(crate) listener_guard: Option<ListenerGuard>,
    pub(crate) blocks: BlockIndex,
    pub(crate) overlap: Box<dyn OverlapPolicy>,
    pub(crate) haptics: Box<dyn Haptics>,
    pub(crate) on_time_range_select: Option<SelectionCallback>,
    pub(crate) on_double_click: Option<SelectionCallback>,
    pub(crate) subscription: Option<Subscription>,
    pub(crate) external_preview: Option<DateTimeSelection>,
    pub(crate) drop_time: Option<TimePoint>,
    pub(crate) last_outcome: Option<SessionOutcome>,
}

// ============================================================================
// Construction
// ============================================================================

/// Builder mirroring the column's inbound properties.
pub struct DayColumnBuilder {
    date: NaiveDate,
    settings: SelectionSettings,
    hour_height: Option<f32>,
    disabled: bool,
    on_time_range_select: Option<SelectionCallback>,
    on_double_click: Option<SelectionCallback>,
    overlap: Box<dyn OverlapPolicy>,
    haptics: Box<dyn Haptics>,
    listeners: Option<ListenerRegistry>,
    subscription: Option<Subscription>,
    blocks: BlockIndex,
}

impl DayColumnBuilder {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            settings: SelectionSettings::default(),
            hour_height: None,
            disabled: false,
            on_time_range_select: None,
            on_double_click: None,
            overlap: Box::new(NoOverlapCheck),
            haptics: Box::new(NoHaptics),
            listeners: None,
            subscription: None,
            blocks: BlockIndex::new(),
        }
    }

    pub fn settings(mut self, settings: SelectionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Pixels per hour; defaults to the settings value.
    pub fn hour_height(mut self, hour_height: f32) -> Self {
        self.hour_height = Some(hour_height);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_time_range_select(mut self, callback: impl FnMut(&DateTimeSelection) + 'static) -> Self {
        self.on_time_range_select = Some(Box::new(callback));
        self
    }

    pub fn on_double_click(mut self, callback: impl FnMut(&DateTimeSelection) + 'static) -> Self {
        self.on_double_click = Some(Box::new(callback));
        self
    }

    pub fn overlap_policy(mut self, policy: impl OverlapPolicy + 'static) -> Self {
        self.overlap = Box::new(policy);
        self
    }

    /// Reject selections overlapping these plans.
    pub fn plans(self, plans: Vec<CalendarPlan>) -> Self {
        self.overlap_policy(PlanOverlap::new(plans))
    }

    pub fn haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Share a listener registry with the other columns on screen.
    pub fn listeners(mut self, registry: ListenerRegistry) -> Self {
        self.listeners = Some(registry);
        self
    }

    pub fn signals(mut self, bus: &SignalBus) -> Self {
        self.subscription = Some(bus.subscribe());
        self
    }

    pub fn blocks(mut self, blocks: BlockIndex) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn build(self) -> DayColumn {
        let hour_height = self.hour_height.unwrap_or(self.settings.hour_height);
        let thresholds = self.settings.thresholds();
        DayColumn {
            id: ColumnId::next(),
            date: self.date,
            settings: self.settings,
            thresholds,
            hour_height,
            disabled: self.disabled,
            session: SessionState::Idle,
            touch: None,
            listeners: self.listeners.unwrap_or_default(),
            listener_guard: None,
            blocks: self.blocks,
            overlap: self.overlap,
            haptics: self.haptics,
            on_time_range_select: self.on_time_range_select,
            on_double_click: self.on_double_click,
            subscription: self.subscription,
            external_preview: None,
            drop_time: None,
            last_outcome: None,
        }
    }
}

impl DayColumn {
    pub fn builder(date: NaiveDate) -> DayColumnBuilder {
        DayColumnBuilder::new(date)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn settings(&self) -> &SelectionSettings {
        &self.settings
    }

    /// True while the column owns the global listener set.
    pub fn has_global_listeners(&self) -> bool {
        self.listener_guard.is_some()
    }

    /// True while a touch long-press timer is pending.
    pub fn has_pending_timer(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// When the host should call [`DayColumn::poll_timers`] next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.touch
            .as_ref()
            .and_then(|touch| touch.timer())
            .map(|timer| timer.deadline)
    }

    pub fn last_outcome(&self) -> Option<SessionOutcome> {
        self.last_outcome
    }

    pub fn blocks(&self) -> &BlockIndex {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut BlockIndex {
        &mut self.blocks
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    // ========================================================================
    // Property updates
    // ========================================================================

    /// Disabling cancels any in-flight session.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.cancel(CancelReason::Disabled);
        }
    }

    /// Takes effect for the next mapped position; an in-flight range keeps
    /// the times already mapped.
    pub fn set_hour_height(&mut self, hour_height: f32) {
        self.hour_height = hour_height;
    }

    /// Apply reloaded settings, e.g. after [`crate::settings_watcher::SettingsEvent::Modified`].
    ///
    /// Invalid settings are refused and the current ones stay in place. An
    /// in-flight session is cancelled so it never mixes two grids. The
    /// column keeps its hour height; hosts pass that separately.
    pub fn set_settings(&mut self, settings: SelectionSettings) -> SettingsResult<()> {
        settings.validate()?;
        self.cancel(CancelReason::Superseded);
        self.thresholds = settings.thresholds();
        self.settings = settings;
        tracing::debug!(column = self.id.raw(), "Applied calendar settings");
        Ok(())
    }

    /// Point the column at another day, cancelling any in-flight session.
    pub fn set_date(&mut self, date: NaiveDate) {
        if date != self.date {
            self.cancel(CancelReason::Superseded);
            self.external_preview = None;
            self.date = date;
        }
    }

    pub fn set_overlap_policy(&mut self, policy: impl OverlapPolicy + 'static) {
        self.overlap = Box::new(policy);
    }

    pub fn set_plans(&mut self, plans: Vec<CalendarPlan>) {
        self.set_overlap_policy(PlanOverlap::new(plans));
    }

    pub fn set_on_time_range_select(&mut self, callback: Option<SelectionCallback>) {
        self.on_time_range_select = callback;
    }

    pub fn set_on_double_click(&mut self, callback: Option<SelectionCallback>) {
        self.on_double_click = callback;
    }

    // ========================================================================
    // Hover / drop time
    // ========================================================================

    /// Track the pointer inside the column and return the `HH:MM` under it.
    ///
    /// Independent of selection; used when external items are dragged onto
    /// the calendar.
    pub fn hover(&mut self, y: f32) -> String {
        let time = self.time_at(y);
        self.drop_time = Some(time);
        format_drop_time(time)
    }

    pub fn hover_exit(&mut self) {
        self.drop_time = None;
    }

    pub fn drop_time(&self) -> Option<String> {
        self.drop_time.map(format_drop_time)
    }

    // ========================================================================
    // Preview
    // ========================================================================

    /// The block to draw: the live drag if any, otherwise an external preview.
    pub fn preview(&self) -> Option<SelectionPreview> {
        if let SessionState::Previewing { range, invalid, .. } = self.session {
            return Some(SelectionPreview {
                range,
                geometry: PreviewGeometry::for_range(&range, self.hour_height),
                invalid,
                external: false,
            });
        }
        self.external_preview.map(|selection| {
            let range = selection.range();
            SelectionPreview {
                range,
                geometry: PreviewGeometry::for_range(&range, self.hour_height),
                invalid: false,
                external: true,
            }
        })
    }

    // ========================================================================
    // Keyboard and cancellation
    // ========================================================================

    /// Global key handler; Escape cancels the in-flight session.
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.disabled || self.listener_guard.is_none() {
            return false;
        }
        match key {
            Key::Escape => self.cancel(CancelReason::EscapeKey),
            Key::Other => false,
        }
    }

    /// Cancel any in-flight gesture. Returns false if there was none.
    pub fn cancel(&mut self, reason: CancelReason) -> bool {
        if !self.is_active() {
            return false;
        }
        self.finish(SessionOutcome::Cancelled(reason));
        true
    }

    /// A gesture is in flight: a session, a pending touch, or held listeners.
    pub fn is_active(&self) -> bool {
        !self.session.is_idle() || self.touch.is_some() || self.listener_guard.is_some()
    }

    // ========================================================================
    // Signals
    // ========================================================================

    /// Apply queued cross-component signals. Returns how many were applied.
    pub fn process_signals(&mut self) -> usize {
        let Some(signals) = self.subscription.as_ref().map(Subscription::drain) else {
            return 0;
        };
        let count = signals.len();
        for signal in signals {
            self.apply_signal(signal);
        }
        count
    }

    fn apply_signal(&mut self, signal: CalendarSignal) {
        match signal {
            CalendarSignal::DragCancel => {
                self.cancel(CancelReason::ExternalCancel);
                self.external_preview = None;
            }
            CalendarSignal::ShowSelection(selection) => {
                // One external selection is visible across the calendar at a time.
                if selection.date() == self.date {
                    tracing::debug!(column = self.id.raw(), range = %selection.range(), "Showing external selection");
                    self.external_preview = Some(selection);
                } else {
                    self.external_preview = None;
                }
            }
            CalendarSignal::ClearSelection => {
                self.external_preview = None;
            }
        }
    }

    // ========================================================================
    // Shared handler plumbing
    // ========================================================================

    #[inline]
    pub(crate) fn time_at(&self, y: f32) -> TimePoint {
        pixels_to_time(y, self.hour_height, self.settings.snap_minutes)
    }

    /// Block that owns input at `position`, if any.
    pub(crate) fn block_at(&self, position: ColumnPoint) -> Option<BlockHit> {
        self.blocks.topmost_at(position.x, position.y)
    }

    /// Acquire the global listener set for a new gesture.
    pub(crate) fn begin_gesture(&mut self) -> bool {
        if self.listener_guard.is_some() {
            return false;
        }
        match self.listeners.acquire(self.id) {
            Some(guard) => {
                self.listener_guard = Some(guard);
                self.external_preview = None;
                true
            }
            None => false,
        }
    }

    /// The selection created by a click, tap or double-click at `anchor`.
    pub(crate) fn point_selection(&self, anchor: TimePoint) -> DateTimeSelection {
        let range = range_with_duration(anchor, self.settings.default_duration_minutes);
        DateTimeSelection::new(self.date, range)
    }

    pub(crate) fn emit_haptic_tick(&mut self) {
        if self.settings.haptics {
            self.haptics.selection_tick();
        }
    }

    pub(crate) fn emit_haptic_long_press(&mut self) {
        if self.settings.haptics {
            self.haptics.long_press();
        }
    }

    /// Commit `selection` through the select handler, or cancel if none is set.
    pub(crate) fn commit(&mut self, selection: DateTimeSelection) -> SessionOutcome {
        if self.on_time_range_select.is_none() {
            return self.finish(SessionOutcome::Cancelled(CancelReason::NoHandler));
        }
        let outcome = self.finish(SessionOutcome::Committed(selection));
        if let Some(callback) = self.on_time_range_select.as_mut() {
            callback(&selection);
        }
        outcome
    }

    /// End the current gesture.
    ///
    /// The only place that resets the session, clears the long-press timer
    /// and releases the global listeners. Every terminal path calls it.
    pub(crate) fn finish(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        self.session.reset();
        self.touch = None;
        self.listener_guard = None;
        self.last_outcome = Some(outcome);

        match outcome {
            SessionOutcome::Committed(selection) => {
                tracing::debug!(column = self.id.raw(), date = %selection.date(), range = %selection.range(), "Selection committed");
            }
            SessionOutcome::Rejected(range) => {
                tracing::warn!(column = self.id.raw(), %range, "Selection rejected by overlap policy");
            }
            SessionOutcome::Cancelled(reason) => {
                tracing::debug!(column = self.id.raw(), ?reason, "Selection cancelled");
            }
        }
        outcome
    }
}

impl Drop for DayColumn {
    fn drop(&mut self) {
        self.cancel(CancelReason::Unmounted);
    }
}
