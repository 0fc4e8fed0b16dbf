/*
[INPUT]:  Task-list ids, titles and task bodies
[OUTPUT]: Task summary, task-lists with their tasks, created lists and tasks
[POS]:    HTTP layer - Google Tasks backed endpoints
[UPDATE]: When adding task endpoints or changing request bodies
*/

use crate::http::{DashboardClient, Result};
use crate::types::{NewTask, Snapshot, Task, TaskList, TaskListsResponse, TaskSummary};
use reqwest::Method;

impl DashboardClient {
    /// Counts for the tasks panel
    ///
    /// GET /tasks
    pub async fn tasks(&self) -> Result<Snapshot<TaskSummary>> {
        let builder = self.request(Method::GET, "/tasks")?;
        self.send_json(builder).await
    }

    /// Every task-list plus its tasks keyed by list id
    ///
    /// GET /tasklists
    pub async fn task_lists(&self) -> Result<TaskListsResponse> {
        let builder = self.request(Method::GET, "/tasklists")?;
        self.send_json(builder).await
    }

    /// Create a task-list
    ///
    /// POST /tasklists?taskListTitle={title}
    pub async fn create_task_list(&self, title: &str) -> Result<TaskList> {
        let builder = self
            .request(Method::POST, "/tasklists")?
            .query(&[("taskListTitle", title)]);
        self.send_json(builder).await
    }

    /// Create a task inside a task-list
    ///
    /// POST /tasks?taskListId={task_list_id}
    pub async fn create_task(&self, task_list_id: &str, task: &NewTask) -> Result<Task> {
        let builder = self
            .request(Method::POST, "/tasks")?
            .query(&[("taskListId", task_list_id)])
            .json(task);
        self.send_json(builder).await
    }
}
