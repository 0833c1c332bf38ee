/// Session-level outcome of a call, broadcast by the transport so the
/// routing layer can redirect without the transport knowing about routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// A 401 arrived; the persisted credentials are already cleared
    Unauthenticated,
    /// A 403 arrived
    Forbidden,
}
