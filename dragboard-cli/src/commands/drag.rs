//! Replay drag gestures from the command line.
//!
//! A gesture becomes start, over and end on the same target. Task moves
//! happen during drag-over and column moves on drop, matching what a pointer
//! produces when it is released where it last hovered.

use anyhow::{bail, Result};
use dragboard_client::BoardSession;
use dragboard_config::ClientConfig;
use dragboard_kanban::{ColumnId, DragEvent, DragOutcome, EntityRef, TaskId};
use tracing::debug;

use super::board::print_board;
use super::open_session;

/// Where a dragged task is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDrop {
    OntoTask(TaskId),
    IntoColumn(ColumnId),
}

impl From<TaskDrop> for EntityRef {
    fn from(target: TaskDrop) -> Self {
        match target {
            TaskDrop::OntoTask(id) => EntityRef::Task(id),
            TaskDrop::IntoColumn(id) => EntityRef::Column(id),
        }
    }
}

/// The event sequence for dragging `active` and releasing it over `target`
pub fn gesture(active: EntityRef, target: EntityRef) -> [DragEvent; 3] {
    [
        DragEvent::Start(active),
        DragEvent::Over(Some(target)),
        DragEvent::End(Some(target)),
    ]
}

/// Feed a gesture to the session and return how it finished
pub fn replay(session: &mut BoardSession, events: [DragEvent; 3]) -> DragOutcome {
    let mut last = DragOutcome::Ignored;
    for event in events {
        last = session.handle_drag(event);
        debug!(?event, ?last, "Replayed drag event");
        if last == DragOutcome::Ignored {
            break;
        }
    }
    last
}

async fn run_gesture(config: &ClientConfig, active: EntityRef, target: EntityRef) -> Result<()> {
    let mut session = open_session(config).await?;
    let outcome = replay(&mut session, gesture(active, target));
    session.flush().await;

    match outcome {
        DragOutcome::Committed(changes) if changes.is_empty() => {
            println!("Nothing moved");
        }
        DragOutcome::Committed(changes) => {
            println!("Saved {} change(s)", changes.len());
            print_board(session.store());
        }
        DragOutcome::Ignored => bail!("{} is not on the board", active),
        other => bail!("drag of {} ended unexpectedly: {:?}", active, other),
    }
    Ok(())
}

pub async fn run_move_column(config: &ClientConfig, column: ColumnId, onto: ColumnId) -> Result<()> {
    run_gesture(config, EntityRef::Column(column), EntityRef::Column(onto)).await
}

pub async fn run_move_task(config: &ClientConfig, task: TaskId, target: TaskDrop) -> Result<()> {
    run_gesture(config, EntityRef::Task(task), target.into()).await
}
