//! Native menu bar implementation using the `muda` crate (macOS).
//!
//! The item tree built here is the menu "markup"; behavior stays in the
//! action table in [`super`]. Item ids are the table's keys, so the native
//! path and the in-app path dispatch identically.

use std::cell::RefCell;

use muda::{
    Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu,
    accelerator::{Accelerator, Code, Modifiers},
};

use nbw_core::Checkpoint;

use super::checkpoints::checkpoint_entries;
use super::ids;

// muda menus are not Send+Sync; the main thread owns them.
thread_local! {
    static MAIN_MENU: RefCell<Option<Menu>> = const { RefCell::new(None) };
    static RESTORE_SUBMENU: RefCell<Option<Submenu>> = const { RefCell::new(None) };
}

/// Build the native menu bar, install it for the NSApp, and retain it for
/// the page's lifetime. Must run on the main thread.
pub fn install_menu() {
    let menu = create_menu();
    menu.init_for_nsapp();
    MAIN_MENU.with(|cell| {
        *cell.borrow_mut() = Some(menu);
    });
}

/// Create the native menu bar.
///
/// Returns the menu. Use [`menu_event_receiver`] to get menu events.
pub fn create_menu() -> Menu {
    let menu = Menu::new();

    create_file_menu(&menu);
    create_edit_menu(&menu);
    create_view_menu(&menu);
    create_insert_menu(&menu);
    create_cell_menu(&menu);
    create_kernel_menu(&menu);

    menu
}

fn create_file_menu(menu: &Menu) {
    let file_menu = Submenu::new("File", true);

    file_menu
        .append(&MenuItem::with_id(
            ids::NEW_NOTEBOOK,
            "New",
            true,
            Some(Accelerator::new(Some(Modifiers::META), Code::KeyN)),
        ))
        .expect("Failed to add New menu item");
    file_menu
        .append(&MenuItem::with_id(ids::OPEN_NOTEBOOK, "Open...", true, None))
        .expect("Failed to add Open menu item");
    file_menu
        .append(&MenuItem::with_id(
            ids::COPY_NOTEBOOK,
            "Make a Copy...",
            true,
            None,
        ))
        .expect("Failed to add Make a Copy menu item");
    file_menu
        .append(&MenuItem::with_id(
            ids::RENAME_NOTEBOOK,
            "Rename...",
            true,
            None,
        ))
        .expect("Failed to add Rename menu item");
    file_menu
        .append(&MenuItem::with_id(
            ids::SAVE_CHECKPOINT,
            "Save and Checkpoint",
            true,
            Some(Accelerator::new(Some(Modifiers::META), Code::KeyS)),
        ))
        .expect("Failed to add Save and Checkpoint menu item");

    // Revert to Checkpoint submenu, rebuilt on every bus notification
    let restore_submenu = Submenu::with_id(ids::RESTORE_CHECKPOINT, "Revert to Checkpoint", true);
    restore_submenu
        .append(&MenuItem::with_id(
            ids::NO_CHECKPOINTS,
            "No checkpoints",
            false,
            None,
        ))
        .expect("Failed to add checkpoint placeholder");
    file_menu
        .append(&restore_submenu)
        .expect("Failed to add Revert to Checkpoint submenu");

    let restore_submenu_clone = restore_submenu.clone();
    RESTORE_SUBMENU.with(|cell| {
        *cell.borrow_mut() = Some(restore_submenu_clone);
    });

    file_menu
        .append(&PredefinedMenuItem::separator())
        .expect("Failed to add separator");

    file_menu
        .append(&MenuItem::with_id(
            ids::DOWNLOAD_NOTEBOOK,
            "Download as Notebook",
            true,
            None,
        ))
        .expect("Failed to add Download menu item");

    file_menu
        .append(&PredefinedMenuItem::separator())
        .expect("Failed to add separator");

    file_menu
        .append(&MenuItem::with_id(
            ids::KILL_AND_EXIT,
            "Close and Halt",
            true,
            None,
        ))
        .expect("Failed to add Close and Halt menu item");

    menu.append(&file_menu).expect("Failed to add File menu");
}

fn create_edit_menu(menu: &Menu) {
    let edit_menu = Submenu::new("Edit", true);

    let items: [(&str, &str); 12] = [
        (ids::CUT_CELL, "Cut Cell"),
        (ids::COPY_CELL, "Copy Cell"),
        (ids::DELETE_CELL, "Delete Cell"),
        (ids::UNDELETE_CELL, "Undo Delete Cell"),
        (ids::SPLIT_CELL, "Split Cell"),
        (ids::MERGE_CELL_ABOVE, "Merge Cell Above"),
        (ids::MERGE_CELL_BELOW, "Merge Cell Below"),
        (ids::MOVE_CELL_UP, "Move Cell Up"),
        (ids::MOVE_CELL_DOWN, "Move Cell Down"),
        (ids::SELECT_PREVIOUS, "Select Previous Cell"),
        (ids::SELECT_NEXT, "Select Next Cell"),
        (ids::EDIT_METADATA, "Edit Notebook Metadata"),
    ];
    for (id, label) in items {
        edit_menu
            .append(&MenuItem::with_id(id, label, true, None))
            .expect("Failed to add Edit menu item");
    }

    menu.append(&edit_menu).expect("Failed to add Edit menu");
}

fn create_view_menu(menu: &Menu) {
    let view_menu = Submenu::new("View", true);

    view_menu
        .append(&MenuItem::with_id(
            ids::TOGGLE_HEADER,
            "Toggle Header",
            true,
            None,
        ))
        .expect("Failed to add Toggle Header menu item");
    view_menu
        .append(&MenuItem::with_id(
            ids::TOGGLE_TOOLBAR,
            "Toggle Toolbar",
            true,
            None,
        ))
        .expect("Failed to add Toggle Toolbar menu item");

    menu.append(&view_menu).expect("Failed to add View menu");
}

fn create_insert_menu(menu: &Menu) {
    let insert_menu = Submenu::new("Insert", true);

    insert_menu
        .append(&MenuItem::with_id(
            ids::INSERT_CELL_ABOVE,
            "Insert Cell Above",
            true,
            None,
        ))
        .expect("Failed to add Insert Cell Above menu item");
    insert_menu
        .append(&MenuItem::with_id(
            ids::INSERT_CELL_BELOW,
            "Insert Cell Below",
            true,
            None,
        ))
        .expect("Failed to add Insert Cell Below menu item");

    menu.append(&insert_menu).expect("Failed to add Insert menu");
}

fn create_cell_menu(menu: &Menu) {
    let cell_menu = Submenu::new("Cell", true);

    let run_items: [(&str, &str); 5] = [
        (ids::RUN_CELL, "Run"),
        (ids::RUN_CELL_IN_PLACE, "Run in Place"),
        (ids::RUN_ALL_CELLS, "Run All"),
        (ids::RUN_ALL_CELLS_ABOVE, "Run All Above"),
        (ids::RUN_ALL_CELLS_BELOW, "Run All Below"),
    ];
    for (id, label) in run_items {
        cell_menu
            .append(&MenuItem::with_id(id, label, true, None))
            .expect("Failed to add Cell run menu item");
    }

    cell_menu
        .append(&PredefinedMenuItem::separator())
        .expect("Failed to add separator");

    let type_submenu = Submenu::new("Cell Type", true);
    let type_items: [(&str, &str); 9] = [
        (ids::TO_CODE, "Code"),
        (ids::TO_MARKDOWN, "Markdown"),
        (ids::TO_RAW, "Raw Text"),
        (ids::TO_HEADING_1, "Heading 1"),
        (ids::TO_HEADING_2, "Heading 2"),
        (ids::TO_HEADING_3, "Heading 3"),
        (ids::TO_HEADING_4, "Heading 4"),
        (ids::TO_HEADING_5, "Heading 5"),
        (ids::TO_HEADING_6, "Heading 6"),
    ];
    for (id, label) in type_items {
        type_submenu
            .append(&MenuItem::with_id(id, label, true, None))
            .expect("Failed to add Cell Type menu item");
    }
    cell_menu
        .append(&type_submenu)
        .expect("Failed to add Cell Type submenu");

    cell_menu
        .append(&PredefinedMenuItem::separator())
        .expect("Failed to add separator");

    let output_items: [(&str, &str); 5] = [
        (ids::TOGGLE_OUTPUT, "Toggle Output"),
        (ids::COLLAPSE_ALL_OUTPUT, "Collapse All Output"),
        (ids::SCROLL_ALL_OUTPUT, "Scroll All Output"),
        (ids::EXPAND_ALL_OUTPUT, "Expand All Output"),
        (ids::CLEAR_ALL_OUTPUT, "Clear All Output"),
    ];
    for (id, label) in output_items {
        cell_menu
            .append(&MenuItem::with_id(id, label, true, None))
            .expect("Failed to add Cell output menu item");
    }

    menu.append(&cell_menu).expect("Failed to add Cell menu");
}

fn create_kernel_menu(menu: &Menu) {
    let kernel_menu = Submenu::new("Kernel", true);

    kernel_menu
        .append(&MenuItem::with_id(
            ids::INTERRUPT_KERNEL,
            "Interrupt",
            true,
            Some(Accelerator::new(Some(Modifiers::META), Code::KeyI)),
        ))
        .expect("Failed to add Interrupt menu item");
    kernel_menu
        .append(&MenuItem::with_id(
            ids::RESTART_KERNEL,
            "Restart",
            true,
            None,
        ))
        .expect("Failed to add Restart menu item");

    menu.append(&kernel_menu).expect("Failed to add Kernel menu");
}

/// Get the menu event receiver.
///
/// Muda uses crossbeam_channel internally. Call `try_recv()` to poll for
/// events.
pub fn menu_event_receiver() -> crossbeam_channel::Receiver<MenuEvent> {
    MenuEvent::receiver().clone()
}

/// Rebuild the Revert to Checkpoint submenu from the current list.
///
/// Existing entries are discarded wholesale; an empty list leaves the
/// disabled placeholder. No-op until the menu bar has been installed.
pub fn update_restore_checkpoint_menu(checkpoints: &[Checkpoint]) {
    RESTORE_SUBMENU.with(|cell| {
        let borrowed = cell.borrow();
        let Some(submenu) = borrowed.as_ref() else {
            return;
        };

        while submenu.remove_at(0).is_some() {}

        for entry in checkpoint_entries(checkpoints) {
            let _ = submenu.append(&MenuItem::with_id(
                &entry.id,
                &entry.label,
                entry.is_enabled(),
                None,
            ));
        }
    });
}
