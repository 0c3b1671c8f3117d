//! Operation wait / delete retry
//!
//! A mutating call hands back an [`Operation`] in the `Issued` state. The
//! waiter polls the scoped operations endpoint until the operation is DONE,
//! carries an error payload, or the policy's timeout runs out. The delete path
//! adds two resilience rules on top: a bounded retry of the delete call itself,
//! and a timeout reassessment that keeps waiting while the instance group is
//! still shrinking.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use super::{ComputeMultiversionService, ScopeType};
use crate::shared::Operation;
use crate::{Error, Result};

/// Status of an operation as reported by its last poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Pending,
    Running,
    Done,
    Failed(String),
    Unknown(String),
}

impl OperationStatus {
    pub fn of(operation: &Operation) -> Self {
        match operation.status.as_str() {
            "DONE" => {
                let errors = operation.error_messages();
                if errors.is_empty() {
                    OperationStatus::Done
                } else {
                    OperationStatus::Failed(errors.join("; "))
                }
            }
            "RUNNING" => OperationStatus::Running,
            "PENDING" => OperationStatus::Pending,
            other => OperationStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Done | OperationStatus::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    Issued,
    Polling,
    Done,
    Failed,
    TimedOut,
}

/// How long to wait for one operation and how often to poll it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(4 * 60),
            poll_interval: Duration::from_secs(2),
        }
    }
}

/// Bound on the delete call itself, not on waiting for its operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRetryPolicy {
    /// Total number of calls, including the first
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for DeleteRetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 20,
            delay: Duration::from_secs(2),
        }
    }
}

/// Everything the instance group manager delete path is bounded by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletePolicy {
    pub wait: WaitPolicy,
    pub retry: DeleteRetryPolicy,
}

fn transition(name: &str, from: &mut WaitState, to: WaitState) {
    if *from != to {
        tracing::info!("operation {}: {:?} -> {:?}", name, from, to);
        *from = to;
    }
}

/// Poll `operation` through `poll` until it reaches a terminal status.
///
/// Transient poll errors are logged and polling continues until the timeout.
pub async fn poll_until_done<F, Fut>(
    mut operation: Operation,
    policy: &WaitPolicy,
    activity: &str,
    mut poll: F,
) -> Result<Operation>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Operation>>,
{
    let started = Instant::now();
    let name = operation.name.clone();
    let mut state = WaitState::Issued;

    loop {
        match OperationStatus::of(&operation) {
            OperationStatus::Done => {
                transition(&name, &mut state, WaitState::Done);
                return Ok(operation);
            }
            OperationStatus::Failed(_) => {
                transition(&name, &mut state, WaitState::Failed);
                return Err(Error::OperationFailed {
                    name,
                    errors: operation.error_messages(),
                });
            }
            OperationStatus::Running | OperationStatus::Pending => {}
            OperationStatus::Unknown(s) => {
                tracing::warn!("Unknown operation status: {}", s);
            }
        }

        if started.elapsed() >= policy.timeout {
            transition(&name, &mut state, WaitState::TimedOut);
            return Err(Error::WaitTimeout {
                activity: activity.to_string(),
                name,
                timeout: policy.timeout,
            });
        }

        transition(&name, &mut state, WaitState::Polling);
        tokio::time::sleep(policy.poll_interval).await;

        match poll(name.clone()).await {
            Ok(polled) => operation = polled,
            Err(e) if e.is_transient() => {
                // Don't fail the wait, might be transient
                tracing::warn!("Failed to poll operation {}: {}", name, e);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Waits on operations through a dispatcher's scoped endpoints.
pub struct OperationWaiter<'a> {
    service: &'a ComputeMultiversionService,
    policy: WaitPolicy,
}

impl<'a> OperationWaiter<'a> {
    pub fn new(service: &'a ComputeMultiversionService, policy: WaitPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> &WaitPolicy {
        &self.policy
    }

    pub async fn wait(
        &self,
        project: &str,
        operation: Operation,
        scope: ScopeType,
        qualifier: Option<&str>,
        activity: &str,
    ) -> Result<Operation> {
        // Reject a bad scope up front, even for an operation that is already done
        scope.operations(qualifier)?;

        let service = self.service;
        poll_until_done(operation, &self.policy, activity, move |name| async move {
            service
                .wait_operation(project, &name, scope, qualifier)
                .await
        })
        .await
    }
}

/// Run `call` until it succeeds or `policy.attempts` calls have failed, sleeping
/// `policy.delay` between calls. The last error is returned unchanged.
///
/// Only errors from the backend call are retried. Anything raised before the
/// request went out is returned from the first attempt.
pub async fn retry_delete<T, F, Fut>(policy: &DeleteRetryPolicy, mut call: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match call(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_backend_call() => return Err(e),
            Err(e) if attempt >= attempts => {
                tracing::warn!("Delete failed after {} attempts: {}", attempt, e);
                return Err(e);
            }
            Err(e) => {
                tracing::warn!("Delete attempt {}/{} failed: {}", attempt, attempts, e);
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

/// Keep waiting on a delete while the instance group keeps shrinking.
///
/// `wait` waits for the delete operation once; `probe` reads the current size
/// of the group. Only a [`Error::WaitTimeout`] triggers a reassessment. Once
/// the tracked size is 0 a further timeout counts as completion.
pub async fn wait_while_shrinking<W, WFut, P, PFut>(
    name: &str,
    mut current_size: i64,
    mut wait: W,
    mut probe: P,
) -> Result<()>
where
    W: FnMut() -> WFut,
    WFut: Future<Output = Result<()>>,
    P: FnMut() -> PFut,
    PFut: Future<Output = Result<i64>>,
{
    loop {
        let err = match wait().await {
            Ok(()) => return Ok(()),
            Err(e) if !e.is_timeout() => return Err(e),
            Err(e) => e,
        };
        if current_size <= 0 {
            tracing::info!("{}: {}, group is already empty", name, err);
            return Ok(());
        }

        let size = probe().await?;
        if size >= current_size {
            return Err(Error::NotShrinking {
                name: name.to_string(),
                size,
                previous: current_size,
            });
        }

        tracing::warn!(
            "timeout occurred, but instance group {} is shrinking ({} < {})",
            name,
            size,
            current_size
        );
        current_size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{OperationError, OperationErrorErrors};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    fn op(status: &str) -> Operation {
        Operation {
            name: "operation-1".to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    fn failed_op(messages: &[&str]) -> Operation {
        Operation {
            error: Some(OperationError {
                errors: messages
                    .iter()
                    .map(|m| OperationErrorErrors {
                        code: "QUOTA_EXCEEDED".to_string(),
                        message: m.to_string(),
                        ..Default::default()
                    })
                    .collect(),
            }),
            ..op("DONE")
        }
    }

    fn timeout() -> Error {
        Error::WaitTimeout {
            activity: "Deleting InstanceGroupManager".to_string(),
            name: "operation-1".to_string(),
            timeout: Duration::from_secs(240),
        }
    }

    #[test]
    fn test_status_of_operation() {
        assert_eq!(OperationStatus::of(&op("PENDING")), OperationStatus::Pending);
        assert_eq!(OperationStatus::of(&op("RUNNING")), OperationStatus::Running);
        assert_eq!(OperationStatus::of(&op("DONE")), OperationStatus::Done);
        assert_eq!(
            OperationStatus::of(&failed_op(&["a", "b"])),
            OperationStatus::Failed("a; b".to_string())
        );
        assert_eq!(
            OperationStatus::of(&op("WEIRD")),
            OperationStatus::Unknown("WEIRD".to_string())
        );
        assert!(!OperationStatus::Running.is_terminal());
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_until_done() {
        let polls = Arc::new(Mutex::new(VecDeque::from(vec![
            Ok(op("RUNNING")),
            Err(Error::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            }),
            Ok(op("DONE")),
        ])));

        let started = Instant::now();
        let done = poll_until_done(op("PENDING"), &WaitPolicy::default(), "test", |name| {
            assert_eq!(name, "operation-1");
            let next = polls.lock().unwrap().pop_front().unwrap();
            async move { next }
        })
        .await
        .unwrap();

        assert_eq!(done.status, "DONE");
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(6) && elapsed < Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_done_operation_is_not_polled() {
        let done = poll_until_done(op("DONE"), &WaitPolicy::default(), "test", |_| async {
            Err(Error::Config("must not poll".to_string()))
        })
        .await
        .unwrap();
        assert_eq!(done.status, "DONE");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_operation_reports_every_error() {
        let err = poll_until_done(op("RUNNING"), &WaitPolicy::default(), "test", |_| async {
            Ok(failed_op(&["quota exceeded", "zone exhausted"]))
        })
        .await
        .unwrap_err();

        match err {
            Error::OperationFailed { name, errors } => {
                assert_eq!(name, "operation-1");
                assert_eq!(errors, vec!["quota exceeded", "zone exhausted"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_times_out() {
        let policy = WaitPolicy {
            timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(3),
        };
        let err = poll_until_done(op("RUNNING"), &policy, "Creating Address", |_| async {
            Ok(op("RUNNING"))
        })
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        assert!(err.to_string().contains("Creating Address"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_transient_poll_error_propagates() {
        let err = poll_until_done(op("RUNNING"), &WaitPolicy::default(), "test", |_| async {
            Err(Error::Api {
                status: 404,
                message: "gone".to_string(),
            })
        })
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_delete_succeeds_on_last_attempt() {
        let started = Instant::now();
        let result = retry_delete(&DeleteRetryPolicy::default(), |attempt| async move {
            if attempt < 20 {
                Err(Error::Api {
                    status: 503,
                    message: format!("attempt {attempt}"),
                })
            } else {
                Ok(attempt)
            }
        })
        .await
        .unwrap();

        assert_eq!(result, 20);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(38) && elapsed < Duration::from_secs(39));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_delete_surfaces_last_error() {
        let calls = Arc::new(Mutex::new(0u32));
        let err = retry_delete(&DeleteRetryPolicy::default(), |attempt| {
            *calls.lock().unwrap() += 1;
            async move {
                Err::<(), _>(Error::Api {
                    status: 400,
                    message: format!("attempt {attempt}"),
                })
            }
        })
        .await
        .unwrap_err();

        assert_eq!(*calls.lock().unwrap(), 20);
        assert!(matches!(err, Error::Api { ref message, .. } if message == "attempt 20"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_delete_returns_local_error_at_once() {
        let started = Instant::now();
        let calls = Arc::new(Mutex::new(0u32));
        let err = retry_delete(&DeleteRetryPolicy::default(), |_| {
            *calls.lock().unwrap() += 1;
            async {
                Err::<(), _>(Error::unknown_version(
                    "InstanceGroupManager",
                    crate::version::ApiVersion::V0Beta,
                ))
            }
        })
        .await
        .unwrap_err();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(matches!(err, Error::UnknownVersion { .. }));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    fn scripted<T>(items: Vec<T>) -> impl FnMut() -> std::future::Ready<T> {
        let items = Arc::new(Mutex::new(VecDeque::from(items)));
        move || std::future::ready(items.lock().unwrap().pop_front().unwrap())
    }

    #[tokio::test]
    async fn test_shrinking_group_eventually_succeeds() {
        let wait = scripted(vec![Err(timeout()), Err(timeout()), Err(timeout()), Err(timeout())]);
        let probe = scripted(vec![Ok(3), Ok(1), Ok(0)]);

        wait_while_shrinking("igm", 5, wait, probe).await.unwrap();
    }

    #[tokio::test]
    async fn test_shrinking_group_completes_when_wait_succeeds() {
        let wait = scripted(vec![Err(timeout()), Ok(())]);
        let probe = scripted(vec![Ok(2)]);

        wait_while_shrinking("igm", 5, wait, probe).await.unwrap();
    }

    #[tokio::test]
    async fn test_stalled_group_is_not_shrinking() {
        let wait = scripted(vec![Err(timeout()), Err(timeout())]);
        let probe = scripted(vec![Ok(3), Ok(3)]);

        let err = wait_while_shrinking("igm", 5, wait, probe).await.unwrap_err();
        assert!(matches!(
            err,
            Error::NotShrinking { size: 3, previous: 3, .. }
        ));
    }

    #[tokio::test]
    async fn test_non_timeout_wait_error_skips_reassessment() {
        let wait = scripted(vec![Err(Error::OperationFailed {
            name: "operation-1".to_string(),
            errors: vec!["boom".to_string()],
        })]);
        let probe = || async { Err::<i64, _>(Error::Config("must not probe".to_string())) };

        let err = wait_while_shrinking("igm", 5, wait, probe).await.unwrap_err();
        assert!(matches!(err, Error::OperationFailed { .. }));
    }
}
