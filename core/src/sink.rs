use crate::script::{Step, SynthesisError};

/// Trait for streaming synthesized steps to a consumer.
pub trait StepSink {
    /// Called once before any steps are emitted.
    ///
    /// Default is a no-op so sinks that don't need setup can ignore it.
    fn begin(&mut self) -> Result<(), SynthesisError> {
        Ok(())
    }

    fn emit(&mut self, step: Step) -> Result<(), SynthesisError>;

    fn finish(&mut self) -> Result<(), SynthesisError> {
        Ok(())
    }
}

/// A sink that collects steps into a Vec for the batch API.
pub struct VecSink {
    steps: Vec<Step>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSink for VecSink {
    fn emit(&mut self, step: Step) -> Result<(), SynthesisError> {
        self.steps.push(step);
        Ok(())
    }
}

/// A sink that forwards steps to a callback.
pub struct CallbackSink<F: FnMut(Step)> {
    f: F,
}

impl<F: FnMut(Step)> CallbackSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(Step)> StepSink for CallbackSink<F> {
    fn emit(&mut self, step: Step) -> Result<(), SynthesisError> {
        (self.f)(step);
        Ok(())
    }
}
