use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::auth::{AuthenticatedUser, CredentialProviderTrait};
use crate::goals::goals_draft::GoalDraft;
use crate::goals::goals_model::{GoalCreationRequest, Outcome, SubmissionFailure};
use crate::goals::goals_traits::{GoalApiClientTrait, GoalCreationServiceTrait};

/// Validates a goal draft and submits it to the goals API.
///
/// The credential provider and API client are injected so front ends and
/// tests can supply their own. Every outcome, including infrastructure
/// failures, is reported as an [`Outcome`]; nothing is retried.
pub struct GoalCreationService {
    credentials: Arc<dyn CredentialProviderTrait>,
    api_client: Arc<dyn GoalApiClientTrait>,
    in_flight: AtomicUsize,
}

/// Marks a submission as in flight until dropped.
struct BusyGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> BusyGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl GoalCreationService {
    pub fn new(
        credentials: Arc<dyn CredentialProviderTrait>,
        api_client: Arc<dyn GoalApiClientTrait>,
    ) -> Self {
        Self {
            credentials,
            api_client,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// `Err` carries the outcome to report when no usable user is found.
    fn authenticate(&self) -> Result<AuthenticatedUser, Outcome> {
        match self.credentials.current_user() {
            Ok(user) => user
                .and_then(|u| u.authenticate())
                .ok_or(Outcome::Unauthenticated),
            Err(e) => {
                error!("[GoalCreation] Failed to read stored user: {}", e);
                Err(Outcome::SubmissionFailed(
                    SubmissionFailure::CredentialStore,
                ))
            }
        }
    }
}

#[async_trait]
impl GoalCreationServiceTrait for GoalCreationService {
    /// Run one submission attempt.
    ///
    /// The user is checked before the form, so a signed-out user with an
    /// empty form sees the authentication error. The API is called only when
    /// both checks pass.
    async fn submit(&self, draft: &GoalDraft) -> Outcome {
        let _busy = BusyGuard::enter(&self.in_flight);

        let user = match self.authenticate() {
            Ok(user) => user,
            Err(outcome) => {
                info!("[GoalCreation] Rejected: {:?}", outcome);
                return outcome;
            }
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            info!("[GoalCreation] Rejected: missing fields {:?}", missing);
            return Outcome::IncompleteForm;
        }

        let request = GoalCreationRequest::from_draft(draft, &user);
        if request.goal_amount.is_nan() {
            warn!(
                "[GoalCreation] Amount {:?} is not numeric, submitting anyway",
                draft.amount
            );
        }
        debug!("[GoalCreation] Creating goal with data: {:?}", request);

        match self.api_client.create_goal(&request, &user.token).await {
            Ok(response) if response.is_created() => {
                debug!("[GoalCreation] Goal creation response: {:?}", response);
                info!("[GoalCreation] Goal '{}' created", request.goal_name);
                Outcome::Success
            }
            Ok(response) => {
                warn!(
                    "[GoalCreation] Goal creation failed ({}): {}",
                    response.status, response.body
                );
                Outcome::SubmissionFailed(SubmissionFailure::BadStatus {
                    status: response.status,
                })
            }
            Err(e) => {
                error!("[GoalCreation] Error in creating goal: {}", e);
                Outcome::SubmissionFailed(SubmissionFailure::Transport)
            }
        }
    }

    /// True while at least one submission is in flight.
    fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}
