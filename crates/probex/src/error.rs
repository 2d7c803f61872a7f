use thiserror::Error;
use wdk_sys::{
    NTSTATUS, STATUS_ACCESS_VIOLATION, STATUS_BUFFER_TOO_SMALL, STATUS_INSUFFICIENT_RESOURCES,
    STATUS_INVALID_DEVICE_STATE, STATUS_INVALID_PARAMETER, STATUS_NOT_FOUND, STATUS_NOT_SUPPORTED,
};

#[derive(Debug, Error)]
pub enum ProbeError {
    /// No target process has been registered yet, or the attach slot is 0.
    #[error("no target process is attached")]
    NotAttached,

    /// Represents an error where an API call failed.
    ///
    /// * `{0}` - The name of the API.
    /// * `{1}` - The status code returned by the API.
    #[error("{0} failed with status {1}")]
    ApiCallFailed(&'static str, NTSTATUS),

    /// The attached identifier no longer refers to a running process.
    #[error("process {0} not found")]
    ProcessNotFound(u32),

    /// The named module is not in the target's loaded-module list.
    #[error("module not found in target process")]
    ModuleNotFound,

    /// An access fault was raised while touching target-process memory and
    /// was contained at the copy boundary.
    #[error("access fault contained during cross-process copy")]
    CopyFault,

    /// Pin or map allocation failed.
    ///
    /// * `{0}` - The API that could not acquire its resource.
    #[error("{0} could not acquire resources")]
    ResourceExhausted(&'static str),

    /// The operation is present in the protocol but not implemented.
    #[error("operation not supported")]
    Unsupported,

    /// A request or transfer buffer is too small for the operation.
    #[error("buffer too small")]
    BufferTooSmall,

    /// Represents an error where a null pointer was encountered.
    ///
    /// * `{0}` - The name of the pointer that was null.
    #[error("pointer is null: {0}")]
    NullPointer(&'static str),
}

impl ProbeError {
    /// Status reported to the controller; the dispatcher pairs any
    /// non-success status with zero valid output bytes.
    pub fn to_ntstatus(&self) -> NTSTATUS {
        match self {
            ProbeError::NotAttached => STATUS_INVALID_DEVICE_STATE,
            ProbeError::ApiCallFailed(_, status) => *status,
            ProbeError::ProcessNotFound(_) => STATUS_NOT_FOUND,
            ProbeError::ModuleNotFound => STATUS_NOT_FOUND,
            ProbeError::CopyFault => STATUS_ACCESS_VIOLATION,
            ProbeError::ResourceExhausted(_) => STATUS_INSUFFICIENT_RESOURCES,
            ProbeError::Unsupported => STATUS_NOT_SUPPORTED,
            ProbeError::BufferTooSmall => STATUS_BUFFER_TOO_SMALL,
            ProbeError::NullPointer(_) => STATUS_INVALID_PARAMETER,
        }
    }
}
