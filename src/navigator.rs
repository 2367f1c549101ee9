//! First-link navigation.
//!
//! The [`Navigator`] walks from page to page by following the first eligible link of
//! each article, until it reaches its target or hits a terminal failure. A cycle gets
//! exactly one second chance: the navigator returns to the page it just left and
//! follows that page's second link instead. A second cycle before any new page is
//! reached ends the run.
//!
//! All run state lives in a [`NavigationState`] owned by the caller, so a run that is
//! interrupted part-way still has its path available.

use crate::error::NavigationError;
use crate::fetchers::PageFetcher;
use crate::parsers::LinkExtractor;
use crate::title::PageTitle;

/// Number of candidates taken from each page: the primary link and its fallback
pub const CANDIDATE_LINKS: usize = 2;

/// Default ceiling on loop passes
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Where a run stands
#[derive(Debug)]
pub enum NavigationStatus {
    Running,
    Succeeded,
    Failed(NavigationError),
}

/// Progress notifications emitted while navigating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A page was committed to the path; `index` is its 1-based position
    Visited { index: usize, title: PageTitle },
    /// The current page is already on the path
    LoopDetected { title: PageTitle },
    /// Returning to `title` to retry with its second link
    Backtracking { title: PageTitle },
    /// The second link of `from` is being followed
    FollowingSecondary { from: PageTitle, to: PageTitle },
    /// The target page was reached
    Reached { title: PageTitle },
}

/// State of one run.
///
/// `visited` is append-only and never holds duplicates. `link_attempt` is 0 when the
/// primary link will be followed and 1 only between a backtrack and the next link
/// selection.
#[derive(Debug)]
pub struct NavigationState {
    visited: Vec<PageTitle>,
    current: PageTitle,
    link_attempt: u8,
    backtracked: bool,
    iterations: usize,
    status: NavigationStatus,
}

impl NavigationState {
    /// Fresh state positioned on `start`
    pub fn new(start: PageTitle) -> Self {
        Self {
            visited: Vec::new(),
            current: start,
            link_attempt: 0,
            backtracked: false,
            iterations: 0,
            status: NavigationStatus::Running,
        }
    }

    /// Pages committed to the path so far, in order
    pub fn visited(&self) -> &[PageTitle] {
        &self.visited
    }

    pub fn current(&self) -> &PageTitle {
        &self.current
    }

    pub fn link_attempt(&self) -> u8 {
        self.link_attempt
    }

    /// Loop passes taken so far
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn status(&self) -> &NavigationStatus {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, NavigationStatus::Running)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, NavigationStatus::Succeeded)
    }

    /// The failure that ended the run, if any
    pub fn error(&self) -> Option<&NavigationError> {
        match &self.status {
            NavigationStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Reported path: the visited pages, followed by the target on success
    pub fn path(&self) -> Vec<PageTitle> {
        let mut path = self.visited.clone();
        if self.succeeded() {
            path.push(self.current.clone());
        }
        path
    }

    fn fail(&mut self, err: NavigationError) {
        ::log::warn!("Navigation failed: {}", err);
        self.status = NavigationStatus::Failed(err);
    }
}

/// Drives a fetcher and an extractor towards a target page
pub struct Navigator<F, E> {
    fetcher: F,
    extractor: E,
    target: PageTitle,
    max_iterations: usize,
}

impl<F: PageFetcher, E: LinkExtractor> Navigator<F, E> {
    pub fn new(fetcher: F, extractor: E, target: PageTitle) -> Self {
        Self {
            fetcher,
            extractor,
            target,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the iteration ceiling
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn target(&self) -> &PageTitle {
        &self.target
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Step until the run reaches a terminal status
    pub async fn run(
        &self,
        state: &mut NavigationState,
        observer: &mut dyn FnMut(&NavigationEvent),
    ) {
        ::log::info!(
            "Navigating from {} to {} (at most {} iterations)",
            state.current,
            self.target,
            self.max_iterations
        );

        while state.is_running() {
            self.step(state, observer).await;
        }
    }

    /// Perform one loop pass. Does nothing once the run has finished.
    pub async fn step(
        &self,
        state: &mut NavigationState,
        observer: &mut dyn FnMut(&NavigationEvent),
    ) {
        if !state.is_running() {
            return;
        }

        if state.iterations >= self.max_iterations {
            state.fail(NavigationError::BudgetExhausted {
                limit: self.max_iterations,
            });
            return;
        }
        state.iterations += 1;

        if state.current == self.target {
            ::log::info!("Reached {} after {} pages", self.target, state.visited.len());
            observer(&NavigationEvent::Reached {
                title: state.current.clone(),
            });
            state.status = NavigationStatus::Succeeded;
            return;
        }

        // Re-entering the page we backtracked to: it is already on the path
        let retrying = state.link_attempt == 1 && state.visited.last() == Some(&state.current);

        if !retrying {
            if state.visited.contains(&state.current) {
                observer(&NavigationEvent::LoopDetected {
                    title: state.current.clone(),
                });

                if state.backtracked {
                    state.fail(NavigationError::LoopDetected {
                        title: state.current.clone(),
                    });
                    return;
                }

                let Some(previous) = state.visited.last().cloned() else {
                    state.fail(NavigationError::LoopDetected {
                        title: state.current.clone(),
                    });
                    return;
                };

                ::log::info!(
                    "Loop at {}, retrying {} with its second link",
                    state.current,
                    previous
                );
                observer(&NavigationEvent::Backtracking {
                    title: previous.clone(),
                });
                state.link_attempt = 1;
                state.backtracked = true;
                state.current = previous;
                return;
            }

            state.visited.push(state.current.clone());
            state.backtracked = false;
            observer(&NavigationEvent::Visited {
                index: state.visited.len(),
                title: state.current.clone(),
            });
        }

        let page = match self.fetcher.fetch(&state.current).await {
            Ok(page) => page,
            Err(source) => {
                let title = state.current.clone();
                state.fail(NavigationError::FetchFailed { title, source });
                return;
            }
        };

        let mut candidates = self.extractor.extract(&page.html, CANDIDATE_LINKS);
        if candidates.is_empty() {
            let title = state.current.clone();
            state.fail(NavigationError::NoLinksFound { title });
            return;
        }

        let use_secondary = state.link_attempt == 1 && candidates.len() > 1;
        let chosen = if use_secondary {
            candidates.swap_remove(1)
        } else {
            candidates.swap_remove(0)
        };
        state.link_attempt = 0;

        let Some(next) = PageTitle::from_url(&chosen.url) else {
            state.fail(NavigationError::TitleResolution {
                url: chosen.url.to_string(),
            });
            return;
        };

        if use_secondary {
            observer(&NavigationEvent::FollowingSecondary {
                from: state.current.clone(),
                to: next.clone(),
            });
        }
        ::log::debug!("{} -> {} via '{}'", state.current, next, chosen.text);
        state.current = next;
    }
}
