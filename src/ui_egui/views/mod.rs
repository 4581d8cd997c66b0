use crate::models::task::Task;
use crate::services::layout::TaskSlot;
use crate::ui_egui::drag::DropTarget;

mod grid_view;
mod palette;
mod timeline_view;

pub use grid_view::GridView;
pub use timeline_view::TimelineView;

/// Interactions a view reports back to the controller for this frame.
#[derive(Debug, Default)]
pub struct ViewResponse {
    /// A drop completed on a valid hour cell: reschedule this task there.
    pub reschedule: Option<RescheduleRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescheduleRequest {
    pub task_id: i64,
    pub target: DropTarget,
}

/// Hover text for a task block: title, hour span and priority.
pub fn format_task_tooltip(task: &Task) -> String {
    let slot = TaskSlot::for_task(task);
    let mut text = format!(
        "{}\n{:02}:00 - {:02}:00\nPriority: {}",
        task.title,
        slot.start_hour,
        slot.end_hour,
        task.priority.label()
    );
    if task.completed {
        text.push_str("\nCompleted");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::Priority;

    #[test]
    fn test_tooltip_shows_span_and_priority() {
        let task = Task {
            id: 1,
            title: "Plan sprint".to_string(),
            description: None,
            completed: false,
            priority: Priority::High,
            due_date: None,
            start_time: Some("14:00".to_string()),
            end_time: Some("16:00".to_string()),
            list_id: None,
            is_important: false,
        };

        let tooltip = format_task_tooltip(&task);
        assert!(tooltip.contains("Plan sprint"));
        assert!(tooltip.contains("14:00 - 16:00"));
        assert!(tooltip.contains("Priority: High"));
        assert!(!tooltip.contains("Completed"));
    }

    #[test]
    fn test_tooltip_marks_completed_tasks() {
        let task = Task {
            id: 2,
            title: "Done thing".to_string(),
            description: None,
            completed: true,
            priority: Priority::Low,
            due_date: None,
            start_time: None,
            end_time: None,
            list_id: None,
            is_important: false,
        };

        let tooltip = format_task_tooltip(&task);
        // Untimed tasks sit in the default hour-9 slot.
        assert!(tooltip.contains("09:00 - 10:00"));
        assert!(tooltip.contains("Completed"));
    }
}
