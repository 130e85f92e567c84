//! Timer Reducer
//!
//! Pure list transformations behind every store operation. No I/O, no clock,
//! no id generation: `Add` arrives with a fully built timer.

use crate::models::{Timer, TimerId, TimerUpdates};

/// One mutation of the timer list
#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction {
    Add(Timer),
    Delete(TimerId),
    Toggle(TimerId),
    Tick(TimerId),
    Restart(TimerId),
    Edit { id: TimerId, updates: TimerUpdates },
}

/// Apply `action` to `timers`. Unknown ids are no-ops.
pub fn reduce(timers: &mut Vec<Timer>, action: TimerAction) {
    match action {
        TimerAction::Add(timer) => {
            if timers.iter().any(|t| t.id == timer.id) {
                log::warn!("refusing to add timer with duplicate id {}", timer.id);
                return;
            }
            timers.push(timer);
        }
        TimerAction::Delete(id) => {
            timers.retain(|t| t.id != id);
        }
        TimerAction::Toggle(id) => {
            if let Some(timer) = find_mut(timers, &id) {
                timer.is_running = !timer.is_running;
            }
        }
        TimerAction::Tick(id) => {
            if let Some(timer) = find_mut(timers, &id).filter(|t| t.is_running) {
                timer.remaining_time = timer.remaining_time.saturating_sub(1);
                timer.is_running = timer.remaining_time > 0;
            }
        }
        TimerAction::Restart(id) => {
            if let Some(timer) = find_mut(timers, &id) {
                timer.remaining_time = timer.duration;
                timer.is_running = false;
            }
        }
        TimerAction::Edit { id, updates } => {
            if let Some(timer) = find_mut(timers, &id) {
                let duration = updates.duration;
                updates.merge_fields(timer);
                if let Some(duration) = duration {
                    timer.duration = duration;
                    timer.remaining_time = duration;
                }
                timer.is_running = false;
            }
        }
    }
}

fn find_mut<'a>(timers: &'a mut [Timer], id: &str) -> Option<&'a mut Timer> {
    timers.iter_mut().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTimer;

    fn make_timer(id: &str, duration: u32) -> Timer {
        Timer::from_new(NewTimer::new(format!("Timer {}", id), duration), id.to_string(), 0)
    }

    fn running(id: &str, duration: u32) -> Timer {
        let mut timer = make_timer(id, duration);
        timer.is_running = true;
        timer
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut timers = vec![make_timer("a", 1)];
        reduce(&mut timers, TimerAction::Add(make_timer("b", 2)));
        let ids: Vec<_> = timers.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut timers = vec![make_timer("a", 1)];
        reduce(&mut timers, TimerAction::Add(make_timer("a", 99)));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].duration, 1);
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let before = vec![make_timer("a", 1), make_timer("b", 2)];
        let mut timers = before.clone();
        reduce(&mut timers, TimerAction::Add(make_timer("c", 3)));
        reduce(&mut timers, TimerAction::Delete("c".to_string()));
        assert_eq!(timers, before);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let before = vec![running("a", 5)];
        let mut timers = before.clone();
        for action in [
            TimerAction::Delete("zz".to_string()),
            TimerAction::Toggle("zz".to_string()),
            TimerAction::Tick("zz".to_string()),
            TimerAction::Restart("zz".to_string()),
            TimerAction::Edit { id: "zz".to_string(), updates: TimerUpdates::duration(1) },
        ] {
            reduce(&mut timers, action);
        }
        assert_eq!(timers, before);
    }

    #[test]
    fn test_toggle_flips_running() {
        let mut timers = vec![make_timer("a", 5)];
        reduce(&mut timers, TimerAction::Toggle("a".to_string()));
        assert!(timers[0].is_running);
        reduce(&mut timers, TimerAction::Toggle("a".to_string()));
        assert!(!timers[0].is_running);
    }

    #[test]
    fn test_tick_ignores_stopped_timer() {
        let mut timers = vec![make_timer("a", 5)];
        reduce(&mut timers, TimerAction::Tick("a".to_string()));
        assert_eq!(timers[0].remaining_time, 5);
        assert!(!timers[0].is_running);
    }

    #[test]
    fn test_tick_counts_down_and_stops_at_zero() {
        let mut timers = vec![running("a", 3)];
        let mut seen = Vec::new();
        for _ in 0..3 {
            reduce(&mut timers, TimerAction::Tick("a".to_string()));
            seen.push((timers[0].remaining_time, timers[0].is_running));
        }
        assert_eq!(seen, [(2, true), (1, true), (0, false)]);

        reduce(&mut timers, TimerAction::Tick("a".to_string()));
        assert_eq!(timers[0].remaining_time, 0);
    }

    #[test]
    fn test_tick_running_at_zero_stops_without_underflow() {
        let mut timer = running("a", 3);
        timer.remaining_time = 0;
        let mut timers = vec![timer];
        reduce(&mut timers, TimerAction::Tick("a".to_string()));
        assert_eq!(timers[0].remaining_time, 0);
        assert!(!timers[0].is_running);
    }

    #[test]
    fn test_restart_resets_remaining() {
        let mut timer = running("a", 10);
        timer.remaining_time = 4;
        let mut timers = vec![timer];
        reduce(&mut timers, TimerAction::Restart("a".to_string()));
        assert_eq!(timers[0].remaining_time, 10);
        assert!(!timers[0].is_running);
    }

    #[test]
    fn test_edit_duration_resets_remaining_and_stops() {
        let mut timer = running("a", 60);
        timer.remaining_time = 17;
        let mut timers = vec![timer];
        reduce(
            &mut timers,
            TimerAction::Edit { id: "a".to_string(), updates: TimerUpdates::duration(10) },
        );
        assert_eq!(timers[0].duration, 10);
        assert_eq!(timers[0].remaining_time, 10);
        assert!(!timers[0].is_running);
    }

    #[test]
    fn test_edit_without_duration_keeps_remaining() {
        let mut timer = running("a", 60);
        timer.remaining_time = 17;
        let mut timers = vec![timer];
        let updates = TimerUpdates {
            title: Some("Laundry".to_string()),
            ..Default::default()
        };
        reduce(&mut timers, TimerAction::Edit { id: "a".to_string(), updates });
        assert_eq!(timers[0].title, "Laundry");
        assert_eq!(timers[0].duration, 60);
        assert_eq!(timers[0].remaining_time, 17);
        assert!(!timers[0].is_running);
    }
}
