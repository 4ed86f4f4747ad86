use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status assigned to every freshly created task.
pub const INITIAL_STATUS: &str = "pending";

/// Input structure for creating a task.
///
/// The caller becomes the creator; the assignee is taken from the body and is
/// not checked against existing users beyond the foreign-key constraint.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Free-text description of the task.
    /// Must be between 1 and 1000 characters.
    #[validate(length(min = 1, max = 1000))]
    pub task: String,

    /// The user the task is delegated to.
    pub assignee_id: i32,

    /// Optional priority label.
    pub priority: Option<String>,

    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,
}

/// Input structure for updating a task's status.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskStatusUpdate {
    /// The new status. Free-form, but must not be empty.
    #[validate(length(min = 1, max = 100))]
    pub status: String,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: i32,
    /// Free-text description of the task.
    pub task: String,
    /// Identifier of the user the task is delegated to; the sole party with
    /// access rights to it.
    pub assignee_id: i32,
    /// Identifier of the user who created the task. Retains no special
    /// access after creation.
    pub creator_id: i32,
    /// The current status of the task. Initialized to `"pending"`.
    pub status: String,
    /// Optional priority label.
    pub priority: Option<String>,
    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Access-control rule for reads and mutations: only the assignee may
    /// touch a task. The creator holds no post-creation rights.
    pub fn is_accessible_by(&self, user_id: i32) -> bool {
        self.assignee_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(assignee_id: i32, creator_id: i32) -> Task {
        Task {
            id: 1,
            task: "Write the quarterly report".to_string(),
            assignee_id,
            creator_id,
            status: INITIAL_STATUS.to_string(),
            priority: Some("high".to_string()),
            due_date: None,
        }
    }

    #[test]
    fn test_assignee_has_access() {
        let task = sample_task(7, 7);
        assert!(task.is_accessible_by(7));
        assert!(!task.is_accessible_by(8));
    }

    #[test]
    fn test_creator_alone_has_no_access() {
        // User 3 created the task but delegated it to user 2.
        let task = sample_task(2, 3);
        assert!(task.is_accessible_by(2));
        assert!(!task.is_accessible_by(3));
    }

    #[test]
    fn test_create_task_request_validation() {
        let valid_input = CreateTaskRequest {
            task: "Valid task".to_string(),
            assignee_id: 1,
            priority: Some("low".to_string()),
            due_date: Some(Utc::now()),
        };
        assert!(valid_input.validate().is_ok());

        let empty_task = CreateTaskRequest {
            task: "".to_string(),
            assignee_id: 1,
            priority: None,
            due_date: None,
        };
        assert!(empty_task.validate().is_err());

        let long_task = CreateTaskRequest {
            task: "a".repeat(1001),
            assignee_id: 1,
            priority: None,
            due_date: None,
        };
        assert!(long_task.validate().is_err());
    }

    #[test]
    fn test_status_update_validation() {
        let valid_update = TaskStatusUpdate {
            status: "in_progress".to_string(),
        };
        assert!(valid_update.validate().is_ok());

        let empty_update = TaskStatusUpdate {
            status: "".to_string(),
        };
        assert!(empty_update.validate().is_err());
    }
}
