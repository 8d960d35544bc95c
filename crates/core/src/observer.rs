/// Watches a solver's trace as it is produced.
///
/// Solvers hand every recorded step to the observer the moment it exists,
/// before the step is appended to the final trace. A display can therefore
/// render iterations live instead of waiting for the finished result, and
/// can cut a long run short.
///
/// The return value steers the solver: `None` means keep iterating and
/// `Some(action)` requests one of the solver's own actions, such as stopping
/// with the current estimate.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when no
/// observation is needed.
pub trait Observer<E, A> {
    /// Inspects one trace entry and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every entry.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
