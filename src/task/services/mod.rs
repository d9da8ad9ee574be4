//! Application services for task status changes and the task board.

mod board;
mod status;

pub use board::{BoardColumn, BoardQuery, TaskBoard, TaskBoardError, TaskBoardService, TaskCard};
pub use status::{ChangeTaskStatusRequest, TaskStatusError, TaskStatusResult, TaskStatusService};
