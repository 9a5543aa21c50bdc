//! Core types for the board model

mod board;
mod entity;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use entity::{ActiveEntity, EntityRef};
pub use ids::{BoardId, ColumnId, TaskId};
pub use task::Task;
