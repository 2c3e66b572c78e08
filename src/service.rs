//! Service layer API: instruction in, transfer result out
use super::config::AppConfig;
use super::error::StatusCode;
use super::executor;
use super::parser::parse_instruction;
use super::response::{TransferResponse, snapshots, unchanged_snapshots};
use super::schedule::{self, ExecutionMode};
use super::types::TransferRequest;
use super::utils;
use super::validation::validate;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

pub struct TransferService {
    config: AppConfig,
}

impl TransferService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Process a request against today's UTC date
    pub fn process(&self, request: &mut TransferRequest) -> TransferResponse {
        self.process_on(request, schedule::utc_today())
    }

    /// Parse, validate, schedule and execute one instruction.
    ///
    /// Takes the request's accounts mutably for the length of the call; an
    /// executed transfer is visible in `request.accounts` afterwards. Failures
    /// never escape as errors, they come back as a failed response.
    pub fn process_on(&self, request: &mut TransferRequest, today: NaiveDate) -> TransferResponse {
        let span = tracing::info_span!("transfer", request = %utils::new_request_ref());
        let _enter = span.enter();

        let draft = match parse_instruction(&request.instruction) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(code = %err.code(), "Instruction rejected: {}", err);
                return TransferResponse::parse_failure(&err);
            }
        };
        debug!(?draft, "Instruction parsed");

        let validated = match validate(&draft, &request.accounts, &self.config.supported_currencies) {
            Ok(validated) => validated,
            Err(err) => {
                warn!(code = %err.code(), "Transfer failed validation: {}", err);
                let resolved = [&draft.debit_account_id, &draft.credit_account_id]
                    .into_iter()
                    .filter_map(|id| request.find_account(id));
                let accounts = unchanged_snapshots(&request.accounts, resolved);
                return TransferResponse::for_draft(&draft, err.code(), err.to_string(), accounts);
            }
        };

        let mode = schedule::decide(draft.execute_on.as_deref(), today);
        debug!(?mode, %today, "Execution scheduled");

        let changes = match executor::execute(&mut request.accounts, &validated, mode) {
            Ok(changes) => changes,
            Err(err) => {
                warn!(code = %err.code(), "Transfer could not be applied: {}", err);
                let accounts = unchanged_snapshots(
                    &request.accounts,
                    [validated.debit_index, validated.credit_index],
                );
                return TransferResponse::for_draft(&draft, err.code(), err.to_string(), accounts);
            }
        };

        let code = match mode {
            ExecutionMode::Immediate => StatusCode::Successful,
            ExecutionMode::Deferred => StatusCode::Pending,
        };
        info!(
            code = %code,
            debit = %draft.debit_account_id,
            credit = %draft.credit_account_id,
            amount = validated.amount,
            currency = %draft.currency,
            "Transfer {}",
            if mode == ExecutionMode::Immediate { "executed" } else { "scheduled" }
        );

        TransferResponse::for_draft(
            &draft,
            code,
            code.default_message().to_string(),
            snapshots(&request.accounts, changes),
        )
    }
}
