//! Metadata-driven fault injection.
//!
//! A test driver puts a fault name (for example `ABORTED`) under a reserved
//! request metadata key. [`FaultInjector::dispatch`] checks for it before
//! running an operation and, when the name is in the fault table, answers
//! with a [`SyntheticError`] without running the operation at all.

use tonic::Code;
use tracing::{info, warn};

use crate::config::FaultConfig;
use crate::{BookstoreError, Outcome};

/// An injectable failure: the name a driver sends and the status it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub name: &'static str,
    pub code: Code,
}

/// Faults recognised out of the box
pub const DEFAULT_FAULTS: &[Fault] = &[
    Fault {
        name: "ABORTED",
        code: Code::Aborted,
    },
    Fault {
        name: "INTERNAL",
        code: Code::Internal,
    },
    Fault {
        name: "DATA_LOSS",
        code: Code::DataLoss,
    },
];

impl Fault {
    /// HTTP status equivalent of the fault's gRPC code
    pub fn http_status(&self) -> u16 {
        http_status_for(self.code)
    }
}

/// Canonical gRPC code to HTTP status mapping
pub fn http_status_for(code: Code) -> u16 {
    match code {
        Code::Ok => 200,
        Code::Cancelled => 499,
        Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => 400,
        Code::DeadlineExceeded => 504,
        Code::NotFound => 404,
        Code::AlreadyExists | Code::Aborted => 409,
        Code::PermissionDenied => 403,
        Code::ResourceExhausted => 429,
        Code::Unimplemented => 501,
        Code::Unavailable => 503,
        Code::Unauthenticated => 401,
        Code::Unknown | Code::Internal | Code::DataLoss => 500,
    }
}

/// Failure produced on request instead of by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .fault.name)]
pub struct SyntheticError {
    pub fault: Fault,
}

impl SyntheticError {
    pub fn code(&self) -> Code {
        self.fault.code
    }

    /// The fault name is reported verbatim as the message
    pub fn message(&self) -> &'static str {
        self.fault.name
    }

    pub fn http_status(&self) -> u16 {
        self.fault.http_status()
    }
}

/// Request-scoped key/value metadata a fault signal can be read from
pub trait SignalSource {
    /// First value stored under `key`, if any
    fn signal(&self, key: &str) -> Option<&str>;
}

impl SignalSource for tonic::metadata::MetadataMap {
    fn signal(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.to_str().ok())
    }
}

impl SignalSource for actix_web::http::header::HeaderMap {
    fn signal(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.to_str().ok())
    }
}

/// A signal given directly rather than read from request metadata
impl SignalSource for Option<&str> {
    fn signal(&self, _key: &str) -> Option<&str> {
        *self
    }
}

/// Decides per request whether to run an operation or fail it on purpose
#[derive(Debug, Clone)]
pub struct FaultInjector {
    enabled: bool,
    signal_key: String,
    faults: Vec<Fault>,
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::new(&FaultConfig::default())
    }
}

impl FaultInjector {
    pub fn new(config: &FaultConfig) -> Self {
        Self {
            enabled: config.enabled,
            signal_key: config.signal_key.clone(),
            faults: DEFAULT_FAULTS.to_vec(),
        }
    }

    /// Adds (or replaces, by name) an entry in the fault table
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.faults.retain(|known| known.name != fault.name);
        self.faults.push(fault);
        self
    }

    pub fn signal_key(&self) -> &str {
        &self.signal_key
    }

    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    pub fn lookup(&self, name: &str) -> Option<Fault> {
        self.faults.iter().copied().find(|fault| fault.name == name)
    }

    /// The synthetic error the request asks for, if it names a known fault
    pub fn check<S>(&self, source: &S) -> Option<SyntheticError>
    where
        S: SignalSource + ?Sized,
    {
        if !self.enabled {
            return None;
        }

        let signal = source.signal(&self.signal_key)?;
        match self.lookup(signal) {
            Some(fault) => {
                info!(fault = fault.name, code = ?fault.code, "Injecting synthetic fault");
                Some(SyntheticError { fault })
            }
            None => {
                warn!(signal, key = %self.signal_key, "Unknown fault signal, passing through");
                None
            }
        }
    }

    /// Runs `op` unless the request carries a known fault signal.
    ///
    /// The signal is checked first; errors returned by `op` itself are
    /// passed on unchanged.
    pub fn dispatch<S, T, E, F>(&self, source: &S, op: F) -> Outcome<T>
    where
        S: SignalSource + ?Sized,
        F: FnOnce() -> Result<T, E>,
        BookstoreError: From<E>,
    {
        if let Some(synthetic) = self.check(source) {
            return Err(BookstoreError::Synthetic(synthetic));
        }
        op().map_err(BookstoreError::from)
    }
}
