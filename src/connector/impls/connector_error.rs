use crate::connector::enums::connector_error::ConnectorError;
use crate::connector::enums::driver_error::DriverError;

impl ConnectorError {
    pub fn scope(&self) -> &str {
        match self {
            ConnectorError::Open { scope, .. }
            | ConnectorError::Verify { scope, .. }
            | ConnectorError::Close { scope, .. }
            | ConnectorError::Cancelled { scope, .. }
            | ConnectorError::NotStarted { scope } => scope,
        }
    }

    /// The untouched driver error behind this failure, if any.
    pub fn driver_error(&self) -> Option<&DriverError> {
        match self {
            ConnectorError::Open { source, .. }
            | ConnectorError::Verify { source, .. }
            | ConnectorError::Close { source, .. } => Some(source),
            ConnectorError::Cancelled { .. } | ConnectorError::NotStarted { .. } => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConnectorError::Cancelled { .. })
    }
}
