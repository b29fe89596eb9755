use crate::FormBuilder;

/// Trait for frontends that let a user work on a form.
///
/// A backend takes ownership of the builder, drives it with user input until
/// the user is done, and hands it back with whatever list and answers it
/// ended up with. Submitted answers reach the builder's validator while the
/// backend runs.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the form builder until the user closes it.
    fn run(&self, builder: FormBuilder) -> Result<FormBuilder, Self::Error>;
}
