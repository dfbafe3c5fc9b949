//! The kernel session interface.

/// Kernel lifecycle operations.
///
/// Restart confirmation, error toasts, and reconnect logic belong to the
/// implementation; the menu issues one call per activation.
pub trait SessionController {
    fn interrupt_kernel(&mut self);
    fn restart_kernel(&mut self);

    /// Shut the session down on the server. Used by "Close and Halt"; the
    /// window close that follows is the host page's job.
    fn delete(&mut self);
}
