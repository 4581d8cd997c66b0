// Time-grid layout
// Pure slot and pixel computation for the timeline view. Nothing here
// touches egui, so the whole module is testable headless; the renderer
// consumes the geometry it produces.

use crate::models::task::Task;
use crate::models::week::DayTasks;

/// Height of one hour row in the timeline, in pixels.
pub const HOUR_HEIGHT: f32 = 60.0;
/// Minimum rendered height of a task block, in pixels.
pub const MIN_BLOCK_HEIGHT: f32 = 40.0;
/// Hour a task is slotted under when it has no start time.
pub const DEFAULT_START_HOUR: u32 = 9;
pub const HOURS_PER_DAY: u32 = 24;

/// Integer hour component of a `"HH:MM"` wire string. Sub-hour parts are
/// floored away; there is no sub-hour positioning in the grid.
pub fn hour_component(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}

/// A task's assigned hour span. The end may equal or precede the start;
/// the pixel floor in `SlotGeometry` keeps such spans visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSlot {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TaskSlot {
    /// Slot assignment: a missing start time defaults to hour 9, a missing
    /// end time to start + 1.
    pub fn for_task(task: &Task) -> Self {
        let start_hour = task
            .start_time
            .as_deref()
            .and_then(hour_component)
            .unwrap_or(DEFAULT_START_HOUR);
        let end_hour = task
            .end_time
            .as_deref()
            .and_then(hour_component)
            .unwrap_or(start_hour + 1);

        Self {
            start_hour,
            end_hour,
        }
    }
}

/// Pixel placement of a task block inside a day column. Recomputed on
/// every render, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub top: f32,
    pub height: f32,
}

impl SlotGeometry {
    pub fn for_slot(slot: TaskSlot) -> Self {
        let span_hours = slot.end_hour as i64 - slot.start_hour as i64;

        Self {
            top: slot.start_hour as f32 * HOUR_HEIGHT,
            // 40 px floor so zero- and negative-duration entries stay visible
            height: (span_hours as f32 * HOUR_HEIGHT).max(MIN_BLOCK_HEIGHT),
        }
    }

    pub fn for_task(task: &Task) -> Self {
        Self::for_slot(TaskSlot::for_task(task))
    }
}

/// One positioned block in a day column.
#[derive(Debug, Clone)]
pub struct TaskBlock<'a> {
    pub task: &'a Task,
    pub slot: TaskSlot,
    pub geometry: SlotGeometry,
}

/// Blocks for a single day bucket, in backend order. Tasks sharing an hour
/// are not collision-resolved; later ones simply paint on top.
pub fn layout_day(day: &DayTasks) -> Vec<TaskBlock<'_>> {
    day.tasks
        .iter()
        .map(|task| {
            let slot = TaskSlot::for_task(task);
            TaskBlock {
                task,
                slot,
                geometry: SlotGeometry::for_slot(slot),
            }
        })
        .collect()
}

/// Total pixel height of a day column.
pub fn grid_height() -> f32 {
    HOURS_PER_DAY as f32 * HOUR_HEIGHT
}
