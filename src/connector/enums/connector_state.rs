#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorState {
    Stopped,
    Started,
}
