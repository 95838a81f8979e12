//! Error Types
//!
//! `RemoteRequestError` is the single failure kind of the places service.
//! `FormError` covers rejected form submissions.

use thiserror::Error;

use crate::api::Operation;
use crate::form::FormField;

/// Why a remote request failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    #[error("{0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("응답 해석 실패 ({0})")]
    Decode(String),
}

/// A places service call that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} 요청 실패: {cause}", .operation.method())]
pub struct RemoteRequestError {
    pub operation: Operation,
    pub cause: FailureCause,
}

impl RemoteRequestError {
    pub fn status(operation: Operation, status: u16) -> Self {
        Self { operation, cause: FailureCause::Status(status) }
    }

    pub fn transport(operation: Operation, err: impl std::fmt::Display) -> Self {
        Self { operation, cause: FailureCause::Transport(err.to_string()) }
    }

    pub fn decode(operation: Operation, err: impl std::fmt::Display) -> Self {
        Self { operation, cause: FailureCause::Decode(err.to_string()) }
    }

    /// HTTP status received, if the request got that far
    pub fn http_status(&self) -> Option<u16> {
        match self.cause {
            FailureCause::Status(status) => Some(status),
            _ => None,
        }
    }
}

/// Form submission rejected before or instead of reaching the service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("이미 등록 중입니다")]
    Busy,
    #[error("{} 항목을 입력하세요", .0.label())]
    MissingField(FormField),
    #[error("가격은 0 이상의 숫자여야 합니다: {0:?}")]
    InvalidPrice(String),
    #[error("알 수 없는 카테고리: {0}")]
    UnknownCategory(String),
}
