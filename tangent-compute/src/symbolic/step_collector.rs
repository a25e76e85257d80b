/// A type that collects the steps taken by an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, for callers that only want the
/// result, and for `Vec<S>`, for callers that want the full trail of rewrites.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
