/// Process-wide side effects of the bootstrapper.
///
/// Terminating the process is global, so it sits behind this port. The
/// bootstrapper calls `fail` at most once per run.
pub trait ProcessController {
    /// Write `err` to the diagnostic stream and terminate with exit status 1
    fn fail(&self, err: &anyhow::Error);
}

impl<P: ProcessController + ?Sized> ProcessController for &P {
    fn fail(&self, err: &anyhow::Error) {
        (**self).fail(err)
    }
}
