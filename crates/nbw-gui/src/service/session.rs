//! Kernel session stand-in for standalone runs.

use nbw_core::SessionController;

/// Session controller that tracks lifecycle state and logs transitions.
#[derive(Debug)]
pub struct LocalSession {
    alive: bool,
}

impl Default for LocalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalSession {
    pub fn new() -> Self {
        Self { alive: true }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl SessionController for LocalSession {
    fn interrupt_kernel(&mut self) {
        tracing::info!("interrupting kernel");
    }

    fn restart_kernel(&mut self) {
        tracing::info!("restarting kernel");
        self.alive = true;
    }

    fn delete(&mut self) {
        tracing::info!("shutting down session");
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_marks_the_session_dead() {
        let mut session = LocalSession::new();
        assert!(session.is_alive());
        session.delete();
        assert!(!session.is_alive());
    }

    #[test]
    fn restart_revives_a_dead_session() {
        let mut session = LocalSession::new();
        session.delete();
        session.restart_kernel();
        assert!(session.is_alive());
    }
}
