/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when only the
/// result of an algorithm is needed, such as when checking a practice answer, so that no step
/// text is ever formatted.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);

    /// Returns true if pushed steps are kept. Callers can skip building expensive steps when this
    /// returns false.
    fn is_collecting(&self) -> bool {
        true
    }
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}

    #[inline]
    fn is_collecting(&self) -> bool {
        false
    }
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
