/// Describes a Secretdrop specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the error on the client side.
    ClientError,
    /// Error caused by missing credentials that are required to perform an action.
    Unauthorized,
    /// Error caused by the lack of privileges to perform an action.
    AccessForbidden,
    /// Error caused by an attempt to access a resource that doesn't exist.
    NotFound,
    /// Unknown error.
    Unknown,
}
