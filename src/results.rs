use crate::navigator::{NavigationState, NavigationStatus};
use crate::title::PageTitle;
use serde::{Deserialize, Serialize};

/// Summary of a finished (or interrupted) run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Page the run started from
    pub start: PageTitle,

    /// Page the run was trying to reach
    pub target: PageTitle,

    /// `succeeded`, `interrupted`, or the kind of failure
    pub outcome: String,

    /// Failure message, if the run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Number of pages visited before the target
    pub clicks: usize,

    /// Pages in the order they were visited, ending with the target on success
    pub path: Vec<PageTitle>,
}

impl RunReport {
    /// Build a report from the state a run left behind
    pub fn new(start: PageTitle, target: PageTitle, state: &NavigationState) -> Self {
        let (outcome, error) = match state.status() {
            NavigationStatus::Succeeded => ("succeeded".to_string(), None),
            NavigationStatus::Running => ("interrupted".to_string(), None),
            NavigationStatus::Failed(err) => (err.kind().to_string(), Some(err.to_string())),
        };

        Self {
            start,
            target,
            outcome,
            error,
            clicks: state.visited().len(),
            path: state.path(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome == "succeeded"
    }
}
