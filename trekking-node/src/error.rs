// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use trekking_core::{DerangeError, GroupError};
use trekking_store::StoreError;

/// Failure of a request, turned into a plain-text response with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Group(#[from] GroupError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Group(GroupError::ParticipantNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Group(
                GroupError::Drawn
                | GroupError::AlreadyDrawn
                | GroupError::NotDrawn
                | GroupError::DuplicateParticipant(_),
            ) => StatusCode::CONFLICT,
            ApiError::Group(GroupError::Derange(_)) => StatusCode::BAD_REQUEST,
            ApiError::Group(GroupError::InconsistentAssignment) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Store(StoreError::AlreadyExists(_)) => {
                "Couldn't create trekking because trekking with this name already exists".into()
            }
            ApiError::Store(StoreError::NotFound(_)) => "Couldn't find trekking".into(),
            ApiError::Group(GroupError::Drawn | GroupError::AlreadyDrawn) => {
                "This trekking is already drawn".into()
            }
            ApiError::Group(GroupError::NotDrawn) => "This trekking is not yet drawn".into(),
            ApiError::Group(GroupError::ParticipantNotFound(_)) => {
                "You are not part of this trekking".into()
            }
            ApiError::Group(GroupError::DuplicateParticipant(name)) => {
                format!("{name} is already part of this trekking")
            }
            ApiError::Group(GroupError::Derange(DerangeError::TooFewItems(_))) => {
                "Not enough people in this trekking to draw".into()
            }
            // Storage details only end up in the log.
            ApiError::Store(_) | ApiError::Group(GroupError::InconsistentAssignment) => {
                "Internal storage error".into()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {self}");
        } else {
            warn!("request rejected: {self}");
        }

        (status, self.message()).into_response()
    }
}
