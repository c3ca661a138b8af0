use std::fmt;
use crate::connector::enums::connector_state::ConnectorState;

impl fmt::Display for ConnectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorState::Stopped => write!(f, "stopped"),
            ConnectorState::Started => write!(f, "started"),
        }
    }
}

impl ConnectorState {
    pub fn is_started(&self) -> bool {
        matches!(self, ConnectorState::Started)
    }
}
