//! In-app menu bar for Windows and Linux.
//!
//! On macOS, the native menu bar is used instead (via muda).
//! This module provides an Iced-based menu bar rendered inside the
//! application window. Every item sends the same [`MenuAction`] the native
//! path would, so the handler layer never knows which bar was clicked.

use iced::widget::Space;
use iced::Element;

use crate::message::{MenuBarMenuId, Message};

#[cfg(not(target_os = "macos"))]
use crate::message::MenuAction;
#[cfg(not(target_os = "macos"))]
use crate::menu::checkpoints::CheckpointEntry;

/// Re-export MenuId as an alias for MenuBarMenuId for convenience.
pub type MenuId = MenuBarMenuId;

/// Menu bar state for tracking open menus.
#[derive(Debug, Clone, Default)]
pub struct MenuBarState {
    /// Currently open menu (if any).
    pub open_menu: Option<MenuId>,
}

impl MenuBarState {
    /// Create a new menu bar state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a menu open/closed.
    pub fn toggle(&mut self, menu: MenuId) {
        if self.open_menu == Some(menu) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(menu);
        }
    }

    /// Close all menus.
    pub fn close(&mut self) {
        self.open_menu = None;
    }

    /// Check if a specific menu is open.
    pub fn is_open(&self, menu: MenuId) -> bool {
        self.open_menu == Some(menu)
    }
}

/// Render the in-app menu bar.
///
/// This is only used on Windows and Linux. On macOS, the native menu bar
/// is used. `checkpoints` feeds the Revert to Checkpoint section of the
/// File dropdown.
#[cfg(not(target_os = "macos"))]
pub fn view_menu_bar<'a>(
    state: &MenuBarState,
    checkpoints: Vec<CheckpointEntry>,
) -> Element<'a, Message> {
    use iced::widget::{container, row};
    use iced::{Alignment, Border, Length, Padding, Theme};

    use crate::theme::{GRAY_100, GRAY_200, SPACING_SM, SPACING_XS};

    let file_menu = view_menu_button("File", MenuBarMenuId::File, state);
    let edit_menu = view_menu_button("Edit", MenuBarMenuId::Edit, state);
    let view_menu = view_menu_button("View", MenuBarMenuId::View, state);
    let insert_menu = view_menu_button("Insert", MenuBarMenuId::Insert, state);
    let cell_menu = view_menu_button("Cell", MenuBarMenuId::Cell, state);
    let kernel_menu = view_menu_button("Kernel", MenuBarMenuId::Kernel, state);

    let bar = row![
        file_menu,
        edit_menu,
        view_menu,
        insert_menu,
        cell_menu,
        kernel_menu,
        Space::new().width(Length::Fill),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .padding(Padding::from([SPACING_XS, SPACING_SM]));

    let bar_container =
        container(bar)
            .width(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(GRAY_100.into()),
                border: Border {
                    color: GRAY_200,
                    width: 0.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            });

    // If a menu is open, render the dropdown
    match state.open_menu {
        Some(MenuBarMenuId::File) => {
            iced::widget::stack![bar_container, view_file_dropdown(checkpoints)].into()
        }
        Some(MenuBarMenuId::Edit) => {
            iced::widget::stack![bar_container, view_edit_dropdown()].into()
        }
        Some(MenuBarMenuId::View) => {
            iced::widget::stack![bar_container, view_view_dropdown()].into()
        }
        Some(MenuBarMenuId::Insert) => {
            iced::widget::stack![bar_container, view_insert_dropdown()].into()
        }
        Some(MenuBarMenuId::Cell) => {
            iced::widget::stack![bar_container, view_cell_dropdown()].into()
        }
        Some(MenuBarMenuId::Kernel) => {
            iced::widget::stack![bar_container, view_kernel_dropdown()].into()
        }
        None => bar_container.into(),
    }
}

/// Render a menu button in the menu bar.
#[cfg(not(target_os = "macos"))]
fn view_menu_button<'a>(
    label: &'a str,
    menu_id: MenuBarMenuId,
    state: &MenuBarState,
) -> Element<'a, Message> {
    use iced::widget::{button, text};
    use iced::{Border, Theme};

    use crate::theme::{GRAY_200, GRAY_600, GRAY_800, SPACING_SM, SPACING_XS};

    let is_active = state.is_open(menu_id);

    let style = move |_theme: &Theme, _status: button::Status| {
        if is_active {
            button::Style {
                background: Some(GRAY_200.into()),
                text_color: GRAY_800,
                border: Border::default(),
                ..Default::default()
            }
        } else {
            button::Style {
                background: None,
                text_color: GRAY_600,
                border: Border::default(),
                ..Default::default()
            }
        }
    };

    button(text(label).size(13))
        .on_press(Message::MenuBarToggle(menu_id))
        .padding([SPACING_XS, SPACING_SM])
        .style(style)
        .into()
}

/// Render the File menu dropdown, including the checkpoint section.
#[cfg(not(target_os = "macos"))]
fn view_file_dropdown<'a>(checkpoints: Vec<CheckpointEntry>) -> Element<'a, Message> {
    use iced::widget::column;

    let mut items = column![
        view_menu_item("New", Some("Ctrl+N"), Some(MenuAction::NewNotebook)),
        view_menu_item("Open...", None, Some(MenuAction::OpenNotebook)),
        view_menu_item("Make a Copy...", None, Some(MenuAction::CopyNotebook)),
        view_menu_item("Rename...", None, Some(MenuAction::RenameNotebook)),
        view_menu_item(
            "Save and Checkpoint",
            Some("Ctrl+S"),
            Some(MenuAction::SaveCheckpoint)
        ),
        view_menu_item(
            "Revert to Checkpoint",
            None,
            Some(MenuAction::RestoreCheckpointMenu)
        ),
    ]
    .width(240);

    for entry in checkpoints {
        items = items.push(view_checkpoint_item(entry));
    }

    items = items.push(view_separator());
    items = items.push(view_menu_item(
        "Download as Notebook",
        None,
        Some(MenuAction::DownloadNotebook),
    ));
    items = items.push(view_separator());
    items = items.push(view_menu_item(
        "Close and Halt",
        None,
        Some(MenuAction::KillAndExit),
    ));

    view_dropdown_container(items, 0.0)
}

/// Render the Edit menu dropdown.
#[cfg(not(target_os = "macos"))]
fn view_edit_dropdown<'a>() -> Element<'a, Message> {
    use iced::widget::column;

    let dropdown = column![
        view_menu_item("Cut Cell", None, Some(MenuAction::CutCell)),
        view_menu_item("Copy Cell", None, Some(MenuAction::CopyCell)),
        view_menu_item("Delete Cell", None, Some(MenuAction::DeleteCell)),
        view_menu_item("Undo Delete Cell", None, Some(MenuAction::UndeleteCell)),
        view_separator(),
        view_menu_item("Split Cell", None, Some(MenuAction::SplitCell)),
        view_menu_item("Merge Cell Above", None, Some(MenuAction::MergeCellAbove)),
        view_menu_item("Merge Cell Below", None, Some(MenuAction::MergeCellBelow)),
        view_separator(),
        view_menu_item("Move Cell Up", None, Some(MenuAction::MoveCellUp)),
        view_menu_item("Move Cell Down", None, Some(MenuAction::MoveCellDown)),
        view_separator(),
        view_menu_item("Select Previous Cell", None, Some(MenuAction::SelectPrevious)),
        view_menu_item("Select Next Cell", None, Some(MenuAction::SelectNext)),
        view_separator(),
        view_menu_item("Edit Notebook Metadata", None, Some(MenuAction::EditMetadata)),
    ]
    .width(220);

    // Position after File menu button
    view_dropdown_container(dropdown, 50.0)
}

/// Render the View menu dropdown.
#[cfg(not(target_os = "macos"))]
fn view_view_dropdown<'a>() -> Element<'a, Message> {
    use iced::widget::column;

    let dropdown = column![
        view_menu_item("Toggle Header", None, Some(MenuAction::ToggleHeader)),
        view_menu_item("Toggle Toolbar", None, Some(MenuAction::ToggleToolbar)),
    ]
    .width(200);

    view_dropdown_container(dropdown, 100.0)
}

/// Render the Insert menu dropdown.
#[cfg(not(target_os = "macos"))]
fn view_insert_dropdown<'a>() -> Element<'a, Message> {
    use iced::widget::column;

    let dropdown = column![
        view_menu_item("Insert Cell Above", None, Some(MenuAction::InsertCellAbove)),
        view_menu_item("Insert Cell Below", None, Some(MenuAction::InsertCellBelow)),
    ]
    .width(200);

    view_dropdown_container(dropdown, 150.0)
}

/// Render the Cell menu dropdown.
#[cfg(not(target_os = "macos"))]
fn view_cell_dropdown<'a>() -> Element<'a, Message> {
    use iced::widget::column;
    use nbw_core::HeadingLevel;

    let dropdown = column![
        view_menu_item("Run", None, Some(MenuAction::RunCell)),
        view_menu_item("Run in Place", None, Some(MenuAction::RunCellInPlace)),
        view_menu_item("Run All", None, Some(MenuAction::RunAllCells)),
        view_menu_item("Run All Above", None, Some(MenuAction::RunAllCellsAbove)),
        view_menu_item("Run All Below", None, Some(MenuAction::RunAllCellsBelow)),
        view_separator(),
        view_menu_item("Code", None, Some(MenuAction::ToCode)),
        view_menu_item("Markdown", None, Some(MenuAction::ToMarkdown)),
        view_menu_item("Raw Text", None, Some(MenuAction::ToRaw)),
        view_menu_item(
            "Heading 1",
            None,
            Some(MenuAction::ToHeading(HeadingLevel::H1))
        ),
        view_menu_item(
            "Heading 2",
            None,
            Some(MenuAction::ToHeading(HeadingLevel::H2))
        ),
        view_menu_item(
            "Heading 3",
            None,
            Some(MenuAction::ToHeading(HeadingLevel::H3))
        ),
        view_menu_item(
            "Heading 4",
            None,
            Some(MenuAction::ToHeading(HeadingLevel::H4))
        ),
        view_menu_item(
            "Heading 5",
            None,
            Some(MenuAction::ToHeading(HeadingLevel::H5))
        ),
        view_menu_item(
            "Heading 6",
            None,
            Some(MenuAction::ToHeading(HeadingLevel::H6))
        ),
        view_separator(),
        view_menu_item("Toggle Output", None, Some(MenuAction::ToggleOutput)),
        view_menu_item(
            "Collapse All Output",
            None,
            Some(MenuAction::CollapseAllOutput)
        ),
        view_menu_item("Scroll All Output", None, Some(MenuAction::ScrollAllOutput)),
        view_menu_item("Expand All Output", None, Some(MenuAction::ExpandAllOutput)),
        view_menu_item("Clear All Output", None, Some(MenuAction::ClearAllOutput)),
    ]
    .width(220);

    view_dropdown_container(dropdown, 200.0)
}

/// Render the Kernel menu dropdown.
#[cfg(not(target_os = "macos"))]
fn view_kernel_dropdown<'a>() -> Element<'a, Message> {
    use iced::widget::column;

    let dropdown = column![
        view_menu_item("Interrupt", Some("Ctrl+I"), Some(MenuAction::InterruptKernel)),
        view_menu_item("Restart", None, Some(MenuAction::RestartKernel)),
    ]
    .width(200);

    view_dropdown_container(dropdown, 250.0)
}

/// Render a menu item.
#[cfg(not(target_os = "macos"))]
fn view_menu_item<'a>(
    label: &'a str,
    shortcut: Option<&'a str>,
    action: Option<MenuAction>,
) -> Element<'a, Message> {
    use iced::widget::{button, row, text};
    use iced::{Alignment, Length};

    use crate::theme::{GRAY_600, GRAY_800, SPACING_SM, SPACING_XS};

    let is_enabled = action.is_some();
    let text_color = if is_enabled { GRAY_800 } else { GRAY_600 };

    let content = row![
        text(label).size(13).color(text_color),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);

    let content = if let Some(shortcut) = shortcut {
        row![content, text(shortcut).size(11).color(GRAY_600),].align_y(Alignment::Center)
    } else {
        content
    };

    let btn = button(content)
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(menu_item_style);

    if let Some(action) = action {
        btn.on_press(Message::Menu(action)).into()
    } else {
        btn.into()
    }
}

/// Render a checkpoint entry, indented under the Revert to Checkpoint
/// header. The empty-list placeholder renders disabled.
#[cfg(not(target_os = "macos"))]
fn view_checkpoint_item<'a>(entry: CheckpointEntry) -> Element<'a, Message> {
    use iced::widget::{button, row, text};
    use iced::{Alignment, Length};

    use crate::theme::{GRAY_600, GRAY_800, SPACING_SM, SPACING_XS};

    let text_color = if entry.is_enabled() { GRAY_800 } else { GRAY_600 };

    let content = row![
        Space::new().width(SPACING_SM),
        text(entry.label).size(13).color(text_color),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);

    let btn = button(content)
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(menu_item_style);

    if let Some(action) = entry.action {
        btn.on_press(Message::Menu(action)).into()
    } else {
        btn.into()
    }
}

/// Render a menu separator.
#[cfg(not(target_os = "macos"))]
fn view_separator<'a>() -> Element<'a, Message> {
    use iced::widget::container;
    use iced::{Length, Padding, Theme};

    use crate::theme::{GRAY_200, SPACING_XS};

    container(Space::new().width(Length::Fill).height(1))
        .style(|_theme: &Theme| container::Style {
            background: Some(GRAY_200.into()),
            ..Default::default()
        })
        .padding(Padding::from([SPACING_XS, 0.0]))
        .into()
}

/// Wrap a dropdown in a positioned container.
#[cfg(not(target_os = "macos"))]
fn view_dropdown_container<'a>(
    content: impl Into<Element<'a, Message>>,
    _left_offset: f32,
) -> Element<'a, Message> {
    use iced::widget::container;
    use iced::{Border, Theme};

    use crate::theme::{BORDER_RADIUS_MD, GRAY_200, SPACING_XS, WHITE};

    // Dropdown with shadow and border
    container(content)
        .style(|_theme: &Theme| container::Style {
            background: Some(WHITE.into()),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .padding(SPACING_XS)
        .into()
}

/// Style for menu items.
#[cfg(not(target_os = "macos"))]
fn menu_item_style(_theme: &iced::Theme, _status: iced::widget::button::Status) -> iced::widget::button::Style {
    use iced::widget::button;
    use iced::Border;

    use crate::theme::GRAY_800;

    button::Style {
        background: None,
        text_color: GRAY_800,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// No-op view for macOS (uses native menu).
#[cfg(target_os = "macos")]
pub fn view_menu_bar<'a>(
    _state: &MenuBarState,
    _checkpoints: Vec<crate::menu::checkpoints::CheckpointEntry>,
) -> Element<'a, Message> {
    Space::new().width(0).height(0).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut state = MenuBarState::new();
        assert!(state.open_menu.is_none());

        state.toggle(MenuBarMenuId::File);
        assert!(state.is_open(MenuBarMenuId::File));

        state.toggle(MenuBarMenuId::File);
        assert!(state.open_menu.is_none());
    }

    #[test]
    fn toggling_another_menu_switches() {
        let mut state = MenuBarState::new();
        state.toggle(MenuBarMenuId::File);
        state.toggle(MenuBarMenuId::Kernel);
        assert!(state.is_open(MenuBarMenuId::Kernel));
        assert!(!state.is_open(MenuBarMenuId::File));
    }

    #[test]
    fn close_clears_any_open_menu() {
        let mut state = MenuBarState::new();
        state.toggle(MenuBarMenuId::Cell);
        state.close();
        assert!(state.open_menu.is_none());
    }
}
