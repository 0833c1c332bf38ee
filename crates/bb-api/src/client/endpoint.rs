//! The two endpoint categories of the billing API.
//!
//! A [`Required`] operation surfaces every failure to its caller, with an
//! operation-specific message when the server supplied none. A
//! [`BestEffort`] operation targets an optional lookup endpoint: failures
//! are logged and collapse into an empty value.

use crate::{ApiError, ApiResult};

use bb_core::Envelope;

use std::ops::Deref;

use log::warn;

/// Result of a mandatory endpoint
pub type Required<T> = Result<T, ApiError>;

/// Result of an optional endpoint; never an error
#[derive(Debug)]
pub struct BestEffort<T> {
    value: T,
    skipped: Option<ApiError>,
}

impl<T> BestEffort<T> {
    pub fn fresh(value: T) -> Self {
        Self {
            value,
            skipped: None,
        }
    }

    pub fn degraded(value: T, error: ApiError) -> Self {
        Self {
            value,
            skipped: Some(error),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Whether the endpoint failed and the value is the empty fallback
    pub fn is_degraded(&self) -> bool {
        self.skipped.is_some()
    }

    pub fn skipped_error(&self) -> Option<&ApiError> {
        self.skipped.as_ref()
    }
}

impl<T> Deref for BestEffort<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Return `data` from a successful envelope.
///
/// `success: false` and a missing `data` both count as a server failure.
#[track_caller]
pub(crate) fn unwrap_envelope<T>(envelope: Envelope<T>) -> ApiResult<T> {
    let message = envelope.server_message().map(String::from);
    match (envelope.success, envelope.data) {
        (true, Some(data)) => Ok(data),
        _ => Err(ApiError::server(200, message)),
    }
}

/// Check an envelope whose `data` the caller does not need.
#[track_caller]
pub(crate) fn check_envelope<T>(envelope: Envelope<T>) -> ApiResult<()> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::server(200, envelope.server_message().map(String::from)))
    }
}

pub(crate) fn required<T>(result: ApiResult<Envelope<T>>, fallback: &str) -> Required<T> {
    result
        .and_then(unwrap_envelope)
        .map_err(|e| e.with_fallback(fallback))
}

pub(crate) fn required_unit<T>(result: ApiResult<Envelope<T>>, fallback: &str) -> Required<()> {
    result
        .and_then(check_envelope)
        .map_err(|e| e.with_fallback(fallback))
}

pub(crate) fn best_effort<T: Default>(result: ApiResult<Envelope<T>>, what: &str) -> BestEffort<T> {
    match result.and_then(unwrap_envelope) {
        Ok(value) => BestEffort::fresh(value),
        Err(e) => {
            warn!("{} unavailable, showing empty result: {}", what, e.user_message());
            BestEffort::degraded(T::default(), e)
        }
    }
}
