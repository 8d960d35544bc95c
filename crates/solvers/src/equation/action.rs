/// Control actions supported by the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current estimate.
    StopEarly,
}
