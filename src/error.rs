/// Errors triggered by tree operations given an invalid argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// An absent element was passed where an element is required.
    #[error("element must not be absent")]
    AbsentElement,
}
