/*
[INPUT]:  DashboardClient, caller-owned TaskCache, optional list title, task body
[OUTPUT]: Created task-list and task, refreshed cache
[POS]:    Task workflow - fetch, create list, create task, re-fetch
[UPDATE]: When the workflow steps or cache shape change
*/

use std::collections::BTreeMap;

use chrono::Local;
use dayboard_adapter::{DashboardClient, DashboardError, NewTask, Task, TaskList, TaskListsResponse};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("step {step} ({name}) failed: {source}")]
    Step {
        step: u8,
        name: &'static str,
        #[source]
        source: DashboardError,
    },
    #[error("task-list {0} is not in the cache")]
    UnknownTaskList(String),
}

impl WorkflowError {
    fn step(step: u8, name: &'static str) -> impl FnOnce(DashboardError) -> Self {
        move |source| Self::Step { step, name, source }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Step { source, .. } if source.is_auth_error())
    }
}

/// Task-lists and their tasks as last seen from the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCache {
    pub task_lists: Vec<TaskList>,
    pub tasks: BTreeMap<String, Vec<Task>>,
}

impl TaskCache {
    /// Replace the whole cache with a fresh snapshot
    ///
    /// Every cached list gets a task entry, empty if the backend sent none.
    pub fn replace(&mut self, response: TaskListsResponse) {
        let TaskListsResponse { tasklists, mut tasks } = response;
        self.tasks = tasklists
            .iter()
            .map(|list| (list.id.clone(), tasks.remove(&list.id).unwrap_or_default()))
            .collect();
        self.task_lists = tasklists;
    }

    pub fn push_task_list(&mut self, list: TaskList) {
        self.tasks.entry(list.id.clone()).or_default();
        self.task_lists.push(list);
    }

    pub fn append_task(&mut self, task_list_id: &str, task: Task) -> Result<(), WorkflowError> {
        let tasks = self
            .tasks
            .get_mut(task_list_id)
            .ok_or_else(|| WorkflowError::UnknownTaskList(task_list_id.to_string()))?;
        tasks.push(task);
        Ok(())
    }

    pub fn task_list(&self, id: &str) -> Option<&TaskList> {
        self.task_lists.iter().find(|list| list.id == id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&TaskList> {
        self.task_lists.iter().find(|list| list.title == title)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.values().map(Vec::len).sum()
    }
}

/// What the workflow created
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOutcome {
    pub task_list: TaskList,
    pub task: Task,
}

/// Title used when the caller does not name the new list
pub fn default_list_title() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Create a task-list holding one task and refresh `cache`
///
/// Steps run strictly in order; a failed step stops the rest and a list
/// created before the failure stays on the backend.
pub async fn post_and_get_task_list(
    client: &DashboardClient,
    cache: &mut TaskCache,
    title: Option<String>,
    task: NewTask,
) -> Result<WorkflowOutcome, WorkflowError> {
    let response = client
        .task_lists()
        .await
        .map_err(WorkflowError::step(1, "fetch task-lists"))?;
    cache.replace(response);
    debug!(lists = cache.task_lists.len(), tasks = cache.task_count(), "task cache loaded");

    let title = title.unwrap_or_else(default_list_title);
    let task_list = client
        .create_task_list(&title)
        .await
        .map_err(WorkflowError::step(2, "create task-list"))?;
    info!(list_id = %task_list.id, title = %task_list.title, "task-list created");
    cache.push_task_list(task_list.clone());

    let created = client
        .create_task(&task_list.id, &task)
        .await
        .map_err(WorkflowError::step(3, "create task"))?;
    info!(list_id = %task_list.id, title = %created.title, "task created");
    cache.append_task(&task_list.id, created.clone())?;

    let response = client
        .task_lists()
        .await
        .map_err(WorkflowError::step(4, "re-fetch task-lists"))?;
    cache.replace(response);
    info!(
        lists = cache.task_lists.len(),
        tasks = cache.task_count(),
        new_list_present = cache.tasks.contains_key(&task_list.id),
        "task cache refreshed"
    );

    Ok(WorkflowOutcome {
        task_list,
        task: created,
    })
}
