//---------------------------------------
pub mod api;
pub mod model;
pub mod state;
pub mod store;

pub use api::{ApiResult, ClientError, TaskApi};
pub use model::{CreateTaskInput, Task, TaskStatus, UpdateTaskInput};
pub use state::{TaskEvent, TaskState};
pub use store::TaskStore;
//---------------------------------------
