// Drag-reschedule session state.
//
// The session is owned by `PlannerState` and passed by reference into the
// timeline view; it never lives in toolkit-side storage or module globals.
// One pointer device means at most one session exists at a time.

use chrono::NaiveDate;

use crate::models::task::Task;

/// An hour cell the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub date: NaiveDate,
    pub hour: u32,
}

/// State of an in-progress reschedule gesture.
///
/// Created on drag-start over a task block, updated as the pointer crosses
/// hour cells (a single hovered target, replaced on every cell change),
/// and destroyed unconditionally when the gesture ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub task_id: i64,
    pub task_title: String,
    hovered: Option<DropTarget>,
}

impl DragSession {
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            task_title: task.title.clone(),
            hovered: None,
        }
    }

    /// Move the drop indicator to `target`, replacing any previous one.
    pub fn enter(&mut self, target: DropTarget) {
        self.hovered = Some(target);
    }

    /// The pointer left every valid cell.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<DropTarget> {
        self.hovered
    }

    /// End the gesture. Returns the drop target when the pointer was
    /// released over a valid cell; `None` means the session is discarded
    /// with no mutation issued.
    pub fn finish(self) -> Option<DropTarget> {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 42,
            title: "Review PR".to_string(),
            description: None,
            completed: false,
            priority: Default::default(),
            due_date: None,
            start_time: Some("14:00".to_string()),
            end_time: Some("16:00".to_string()),
            list_id: None,
            is_important: false,
        }
    }

    fn cell(day: u32, hour: u32) -> DropTarget {
        DropTarget {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            hour,
        }
    }

    #[test]
    fn test_new_session_has_no_target() {
        let session = DragSession::begin(&sample_task());
        assert_eq!(session.task_id, 42);
        assert!(session.hovered().is_none());
    }

    #[test]
    fn test_entering_a_cell_replaces_the_previous_target() {
        let mut session = DragSession::begin(&sample_task());
        session.enter(cell(3, 10));
        session.enter(cell(5, 15));
        // Only one indicator exists at a time.
        assert_eq!(session.hovered(), Some(cell(5, 15)));
    }

    #[test]
    fn test_finish_over_a_cell_yields_that_target() {
        let mut session = DragSession::begin(&sample_task());
        session.enter(cell(4, 8));
        assert_eq!(session.finish(), Some(cell(4, 8)));
    }

    #[test]
    fn test_finish_after_leaving_yields_nothing() {
        let mut session = DragSession::begin(&sample_task());
        session.enter(cell(4, 8));
        session.leave();
        assert!(session.finish().is_none());
    }

    #[test]
    fn test_finish_without_ever_hovering_yields_nothing() {
        let session = DragSession::begin(&sample_task());
        assert!(session.finish().is_none());
    }
}
