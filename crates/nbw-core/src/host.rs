//! The host page interface.
//!
//! Everything the menu reaches for outside the notebook document: browser
//! navigation, window lifetime, the rename dialog, and page chrome toggles.

/// Page-level surface injected into the menu bar.
pub trait HostPage {
    /// Open a URL in a new browser context (the "Open..." tree view).
    fn open_url(&mut self, url: &str);

    /// Point the current context at a URL (the download action).
    fn navigate(&mut self, url: &str);

    /// Close the application window. Called after the session is deleted.
    fn close_window(&mut self);

    /// Show the rename dialog owned by the save widget.
    fn rename_notebook_dialog(&mut self);

    /// Toggle the page header and resize the layout.
    fn toggle_header(&mut self);

    /// Toggle the main toolbar and resize the layout.
    fn toggle_toolbar(&mut self);
}
