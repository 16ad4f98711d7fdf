/// ProgressReporter port for user-facing progress messages
///
/// Resolution runs can take a while against a remote store; this port lets
/// the application layer tell the user what is happening without knowing
/// where the messages end up.
pub trait ProgressReporter {
    fn report(&self, message: &str);

    /// Reports `current` of `total` roots resolved so far.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    fn report_error(&self, message: &str);

    fn report_completion(&self, message: &str);
}
