use std::time::Instant;

use crate::notify::{Listeners, SubscriptionId};
use crate::tokens::{TokenStore, TokenValue};

use super::error::PropagationResult;
use super::event::{FlowBoundary, FlowNotification, FlowTransition, FlowTrigger, PropagationEvent};
use super::machine::FlowMachine;
use super::model::{EditOrigin, FlowPhase};
use super::timings::FlowTimings;

/// Writes edits into the store and tracks the single active propagation event.
///
/// Deadlines are plain data: a new edit overwrites them, which is what cancels the
/// previous edit's pending phases. The host calls [`tick`](Self::tick) with the
/// current time, at the latest by [`next_deadline`](Self::next_deadline).
#[derive(Debug)]
pub struct PropagationController {
    timings: FlowTimings,
    machine: FlowMachine,
    active: Option<PropagationEvent>,
    last_edit: Option<PropagationEvent>,
    phase_deadline: Option<Instant>,
    sync_flash_deadline: Option<Instant>,
    next_sequence: u64,
    listeners: Listeners<FlowNotification>,
}

impl PropagationController {
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            timings,
            machine: FlowMachine::new(),
            active: None,
            last_edit: None,
            phase_deadline: None,
            sync_flash_deadline: None,
            next_sequence: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn timings(&self) -> FlowTimings {
        self.timings
    }

    pub fn apply_edit(
        &mut self,
        store: &mut TokenStore,
        key: impl Into<String>,
        value: TokenValue,
        origin: EditOrigin,
        now: Instant,
    ) -> PropagationEvent {
        let key = key.into();
        store.set(key.clone(), value.clone());

        if let Some(superseded) = self.active.as_ref() {
            tracing::debug!(
                superseded = superseded.sequence,
                phase = ?self.machine.phase(),
                "cancelling pending flow of superseded edit"
            );
        }

        let event = PropagationEvent {
            sequence: self.next_sequence,
            key,
            value,
            origin,
        };
        self.next_sequence += 1;

        let phase = self.machine.edit(origin);
        let (phase_delay, sync_flash_deadline) = match origin {
            EditOrigin::Primary => (self.timings.primary_clear, None),
            EditOrigin::ReverseSync => (
                self.timings.reverse_echo,
                Some(now + self.timings.sync_flash),
            ),
        };
        self.phase_deadline = Some(now + phase_delay);
        self.sync_flash_deadline = sync_flash_deadline;
        self.active = Some(event.clone());
        self.last_edit = Some(event.clone());

        tracing::info!(
            key = %event.key,
            value = %event.value,
            origin = ?origin,
            sequence = event.sequence,
            phase = ?phase,
            "token edit applied"
        );
        self.notify(FlowBoundary::Edit);
        event
    }

    /// Fires every deadline due at `now`, oldest first. Returns how many boundaries passed.
    pub fn tick(&mut self, now: Instant) -> PropagationResult<usize> {
        let mut fired = 0;
        loop {
            let phase_due = self.phase_deadline.filter(|deadline| *deadline <= now);
            let flash_due = self.sync_flash_deadline.filter(|deadline| *deadline <= now);

            match (phase_due, flash_due) {
                (None, None) => break,
                (Some(phase_at), Some(flash_at)) if flash_at < phase_at => self.end_sync_flash(),
                (Some(phase_at), _) => self.fire_phase_timeout(phase_at)?,
                (None, Some(_)) => self.end_sync_flash(),
            }
            fired += 1;
        }
        Ok(fired)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.phase_deadline, self.sync_flash_deadline) {
            (Some(phase), Some(flash)) => Some(phase.min(flash)),
            (phase, flash) => phase.or(flash),
        }
    }

    pub fn phase(&self) -> FlowPhase {
        self.machine.phase()
    }

    pub fn active_event(&self) -> Option<&PropagationEvent> {
        self.active.as_ref()
    }

    /// Most recent edit, kept after its flow has cleared.
    pub fn last_edit(&self) -> Option<&PropagationEvent> {
        self.last_edit.as_ref()
    }

    pub fn sync_flash_active(&self) -> bool {
        self.sync_flash_deadline.is_some()
    }

    pub fn history(&self) -> &[FlowTransition] {
        self.machine.history()
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&FlowNotification) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn fire_phase_timeout(&mut self, scheduled_at: Instant) -> PropagationResult<()> {
        let next = self.machine.transition(FlowTrigger::Timeout)?;
        self.phase_deadline = match next {
            FlowPhase::ForwardFromSync => Some(scheduled_at + self.timings.echo_clear),
            FlowPhase::Idle | FlowPhase::Forward | FlowPhase::Reverse => None,
        };
        if !next.is_active() {
            self.active = None;
        }
        tracing::debug!(phase = ?next, "flow phase elapsed");
        self.notify(FlowBoundary::PhaseTimeout);
        Ok(())
    }

    fn end_sync_flash(&mut self) {
        self.sync_flash_deadline = None;
        tracing::debug!("sync flash ended");
        self.notify(FlowBoundary::SyncFlashEnded);
    }

    fn notify(&mut self, boundary: FlowBoundary) {
        let notification = FlowNotification {
            boundary,
            phase: self.machine.phase(),
            event: self.active.clone(),
            sync_flash: self.sync_flash_active(),
        };
        self.listeners.emit(&notification);
    }
}

impl Default for PropagationController {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn primary_edit_writes_store_and_clears_after_single_delay() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::default();

        let event = controller.apply_edit(
            &mut store,
            "radius.component",
            TokenValue::Number(24),
            EditOrigin::Primary,
            start,
        );

        assert_eq!(store.get("radius.component"), Some(&TokenValue::Number(24)));
        assert_eq!(event.origin, EditOrigin::Primary);
        assert_eq!(controller.phase(), FlowPhase::Forward);
        assert!(!controller.sync_flash_active());

        assert_eq!(controller.tick(start + ms(899)).expect("tick"), 0);
        assert_eq!(
            controller.active_event().map(|event| event.origin),
            Some(EditOrigin::Primary)
        );

        assert_eq!(controller.tick(start + ms(900)).expect("tick"), 1);
        assert_eq!(controller.phase(), FlowPhase::Idle);
        assert!(controller.active_event().is_none());
        assert_eq!(
            controller.last_edit().map(|event| event.key.as_str()),
            Some("radius.component")
        );
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn reverse_sync_runs_two_phases_and_keeps_origin_until_cleared() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::default();

        controller.apply_edit(
            &mut store,
            "color.action.primary",
            TokenValue::from("#2563eb"),
            EditOrigin::ReverseSync,
            start,
        );
        assert_eq!(controller.phase(), FlowPhase::Reverse);
        assert!(controller.sync_flash_active());

        controller.tick(start + ms(700)).expect("tick");
        assert_eq!(controller.phase(), FlowPhase::ForwardFromSync);
        assert_eq!(
            controller.active_event().map(|event| event.origin),
            Some(EditOrigin::ReverseSync)
        );

        controller.tick(start + ms(1_200)).expect("tick");
        assert!(!controller.sync_flash_active());
        assert_eq!(controller.phase(), FlowPhase::ForwardFromSync);

        controller.tick(start + ms(1_300)).expect("tick");
        assert_eq!(controller.phase(), FlowPhase::Idle);
        assert!(controller.active_event().is_none());
    }

    #[test]
    fn late_tick_fires_due_boundaries_in_time_order() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::default();
        let boundaries = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&boundaries);
        controller.subscribe(move |notification: &FlowNotification| {
            sink.borrow_mut()
                .push((notification.boundary, notification.phase))
        });

        controller.apply_edit(
            &mut store,
            "space.content.gap",
            TokenValue::Number(30),
            EditOrigin::ReverseSync,
            start,
        );
        assert_eq!(controller.tick(start + ms(5_000)).expect("tick"), 3);

        assert_eq!(
            *boundaries.borrow(),
            vec![
                (FlowBoundary::Edit, FlowPhase::Reverse),
                (FlowBoundary::PhaseTimeout, FlowPhase::ForwardFromSync),
                (FlowBoundary::SyncFlashEnded, FlowPhase::ForwardFromSync),
                (FlowBoundary::PhaseTimeout, FlowPhase::Idle),
            ]
        );
    }

    #[test]
    fn superseding_edit_cancels_pending_reverse_phases() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::default();

        controller.apply_edit(
            &mut store,
            "radius.component",
            TokenValue::Number(20),
            EditOrigin::ReverseSync,
            start,
        );
        let second = controller.apply_edit(
            &mut store,
            "type.heading.weight",
            TokenValue::Number(700),
            EditOrigin::Primary,
            start + ms(100),
        );

        assert!(!controller.sync_flash_active());
        // The first edit's echo would have fired at 700ms.
        assert_eq!(controller.tick(start + ms(800)).expect("tick"), 0);
        assert_eq!(controller.phase(), FlowPhase::Forward);
        assert_eq!(controller.active_event(), Some(&second));

        assert_eq!(controller.tick(start + ms(1_000)).expect("tick"), 1);
        assert_eq!(controller.phase(), FlowPhase::Idle);
        assert!(!controller
            .history()
            .iter()
            .any(|transition| transition.to == FlowPhase::ForwardFromSync));
    }

    #[test]
    fn second_reverse_edit_restarts_the_sequence() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::default();

        controller.apply_edit(
            &mut store,
            "radius.component",
            TokenValue::Number(20),
            EditOrigin::ReverseSync,
            start,
        );
        controller.apply_edit(
            &mut store,
            "radius.component",
            TokenValue::Number(21),
            EditOrigin::ReverseSync,
            start + ms(600),
        );

        controller.tick(start + ms(1_000)).expect("tick");
        assert_eq!(controller.phase(), FlowPhase::Reverse);
        assert!(controller.sync_flash_active());
        assert_eq!(
            controller.next_deadline(),
            Some(start + ms(1_300))
        );
        assert_eq!(
            controller.active_event().map(|event| event.sequence),
            Some(1)
        );
    }

    #[test]
    fn edit_notification_reports_reverse_origin_before_any_transition() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::default();
        let first = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&first);
        controller.subscribe(move |notification: &FlowNotification| {
            sink.borrow_mut().get_or_insert_with(|| notification.clone());
        });

        controller.apply_edit(
            &mut store,
            "color.action.primary",
            TokenValue::from("#059669"),
            EditOrigin::ReverseSync,
            start,
        );

        let first = first.borrow();
        let notification = first.as_ref().expect("edit should notify");
        assert_eq!(notification.boundary, FlowBoundary::Edit);
        assert_eq!(notification.phase, FlowPhase::Reverse);
        assert!(notification.sync_flash);
        assert_eq!(
            notification.event.as_ref().map(|event| event.origin),
            Some(EditOrigin::ReverseSync)
        );
    }

    #[test]
    fn custom_timings_drive_deadlines() {
        let start = Instant::now();
        let mut store = TokenStore::with_defaults();
        let mut controller = PropagationController::new(FlowTimings {
            primary_clear: ms(50),
            ..FlowTimings::default()
        });

        controller.apply_edit(
            &mut store,
            "space.content.gap",
            TokenValue::Number(8),
            EditOrigin::Primary,
            start,
        );
        assert_eq!(controller.next_deadline(), Some(start + ms(50)));
    }
}
