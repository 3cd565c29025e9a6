//! Rejection Action - 검증 실패 시 실행할 동작
//!
//! 정책 평가(`RejectionPolicy::decide`)는 부작용 없이 `RejectionAction`만 계산하고,
//! 실제 로그 기록과 에러 반환은 `execute`에서 수행합니다.

use super::rules::{ErrorFactory, LoggerFn};
use strictstore_foundation::{Error, Method, Result, UnknownEventError};
use tracing::warn;

/// 로그 동작
#[derive(Clone)]
pub enum LogAction {
    /// 표준 메시지를 WARN 레벨로 기록
    Default(String),
    /// 사용자 정의 로거 호출
    Custom {
        logger: LoggerFn,
        event: String,
        method: Method,
    },
}

impl LogAction {
    fn run(self) {
        match self {
            LogAction::Default(message) => warn!(target: "strictstore", "{}", message),
            LogAction::Custom {
                logger,
                event,
                method,
            } => logger(&event, method),
        }
    }
}

/// 에러 동작
#[derive(Clone)]
pub enum RaiseAction {
    /// 기본 unknown-event 에러
    Builtin(UnknownEventError),
    /// 사용자 정의 factory (실행 시점에 한 번 호출)
    Factory {
        factory: ErrorFactory,
        event: String,
        method: Method,
    },
}

impl RaiseAction {
    fn into_error(self) -> Error {
        match self {
            RaiseAction::Builtin(err) => Error::UnknownEvent(err),
            RaiseAction::Factory {
                factory,
                event,
                method,
            } => Error::Rejected(factory(&event, method)),
        }
    }
}

/// 검증 실패 시의 최종 결정
#[derive(Clone)]
pub enum RejectionAction {
    Ignore,
    Log(LogAction),
    Raise(RaiseAction),
    LogThenRaise(LogAction, RaiseAction),
}

impl RejectionAction {
    /// 로그/에러 조합으로 결정 생성
    pub fn from_parts(log: Option<LogAction>, raise: Option<RaiseAction>) -> Self {
        match (log, raise) {
            (None, None) => Self::Ignore,
            (Some(log), None) => Self::Log(log),
            (None, Some(raise)) => Self::Raise(raise),
            (Some(log), Some(raise)) => Self::LogThenRaise(log, raise),
        }
    }

    pub fn logs(&self) -> bool {
        matches!(self, Self::Log(_) | Self::LogThenRaise(..))
    }

    pub fn raises(&self) -> bool {
        matches!(self, Self::Raise(_) | Self::LogThenRaise(..))
    }

    /// 결정 실행
    ///
    /// 에러가 없으면 `Ok(false)` (호출 거부, 아무 것도 하지 않음)
    pub fn execute(self) -> Result<bool> {
        match self {
            Self::Ignore => Ok(false),
            Self::Log(log) => {
                log.run();
                Ok(false)
            }
            Self::Raise(raise) => Err(raise.into_error()),
            Self::LogThenRaise(log, raise) => {
                log.run();
                Err(raise.into_error())
            }
        }
    }
}

impl std::fmt::Debug for RejectionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ignore => "Ignore",
            Self::Log(_) => "Log",
            Self::Raise(_) => "Raise",
            Self::LogThenRaise(..) => "LogThenRaise",
        };
        f.write_str(name)
    }
}
