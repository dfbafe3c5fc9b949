//! Host page backed by the system browser and window.

use nbw_core::HostPage;

/// [`HostPage`] implementation for standalone desktop runs.
///
/// URLs open in the system browser via the `open` crate; page chrome
/// toggles flip flags the view reads.
#[derive(Debug)]
pub struct SystemHost {
    header_visible: bool,
    toolbar_visible: bool,
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            header_visible: true,
            toolbar_visible: true,
        }
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn toolbar_visible(&self) -> bool {
        self.toolbar_visible
    }
}

impl HostPage for SystemHost {
    fn open_url(&mut self, url: &str) {
        tracing::info!(url, "opening in browser");
        if let Err(e) = open::that(url) {
            tracing::warn!(error = %e, url, "failed to open browser");
        }
    }

    fn navigate(&mut self, url: &str) {
        // No embedded web view to steer; the browser is the target either way.
        self.open_url(url);
    }

    fn close_window(&mut self) {
        tracing::info!("closing window");
        std::process::exit(0);
    }

    fn rename_notebook_dialog(&mut self) {
        tracing::info!("rename dialog requested");
    }

    fn toggle_header(&mut self) {
        self.header_visible = !self.header_visible;
        tracing::debug!(visible = self.header_visible, "header toggled");
    }

    fn toggle_toolbar(&mut self) {
        self.toolbar_visible = !self.toolbar_visible;
        tracing::debug!(visible = self.toolbar_visible, "toolbar toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_toggles_flip_their_flags() {
        let mut host = SystemHost::new();
        assert!(host.header_visible());
        assert!(host.toolbar_visible());

        host.toggle_header();
        host.toggle_toolbar();
        assert!(!host.header_visible());
        assert!(!host.toolbar_visible());

        host.toggle_header();
        assert!(host.header_visible());
    }
}
