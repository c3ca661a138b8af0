use thiserror::Error;
use crate::connector::enums::driver_error::DriverError;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("[{scope}] Unable to open connection: {source}")]
    Open {
        scope: String,
        #[source]
        source: DriverError,
    },

    #[error("[{scope}] Connectivity check failed: {source}")]
    Verify {
        scope: String,
        #[source]
        source: DriverError,
    },

    #[error("[{scope}] Unable to close connection: {source}")]
    Close {
        scope: String,
        #[source]
        source: DriverError,
    },

    #[error("[{scope}] Cancelled while {phase}")]
    Cancelled {
        scope: String,
        phase: &'static str,
    },

    #[error("[{scope}] Connector is not started")]
    NotStarted {
        scope: String,
    },
}
