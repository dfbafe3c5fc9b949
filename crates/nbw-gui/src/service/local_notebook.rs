//! In-memory notebook document.
//!
//! A self-contained [`NotebookController`] used when the application runs
//! without a server: cells live in a `Vec`, checkpoints are snapshots of
//! that `Vec`, and checkpoint changes go out over the notification bus.

use chrono::Utc;
use uuid::Uuid;

use nbw_core::{
    CellType, Checkpoint, CheckpointId, EventBus, ExecuteOptions, HeadingLevel, NotebookController,
    NotebookError, NotebookEvent, SaveOptions,
};

/// What a cell currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
    Heading(u8),
}

impl From<CellType> for CellKind {
    fn from(value: CellType) -> Self {
        match value {
            CellType::Code => CellKind::Code,
            CellType::Markdown => CellKind::Markdown,
            CellType::Raw => CellKind::Raw,
        }
    }
}

/// One cell of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub source: String,
    pub output_collapsed: bool,
    pub output: Option<String>,
}

impl Cell {
    fn empty(kind: CellKind) -> Self {
        Self {
            kind,
            source: String::new(),
            output_collapsed: false,
            output: None,
        }
    }
}

/// In-memory notebook backing the menu bar in standalone runs.
pub struct LocalNotebook {
    name: String,
    cells: Vec<Cell>,
    selected: usize,
    dirty: bool,
    clipboard: Option<Cell>,
    undelete_stack: Vec<(usize, Cell)>,
    checkpoints: Vec<(Checkpoint, Vec<Cell>)>,
    bus: EventBus,
}

impl LocalNotebook {
    pub fn new(name: impl Into<String>, bus: EventBus) -> Self {
        Self {
            name: name.into(),
            cells: vec![Cell::empty(CellKind::Code)],
            selected: 0,
            dirty: false,
            clipboard: None,
            undelete_stack: Vec::new(),
            checkpoints: Vec::new(),
            bus,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn selected_cell_mut(&mut self) -> &mut Cell {
        &mut self.cells[self.selected]
    }

    fn set_kind(&mut self, kind: CellKind) {
        self.selected_cell_mut().kind = kind;
        self.dirty = true;
    }

    fn checkpoint_list(&self) -> Vec<Checkpoint> {
        self.checkpoints.iter().map(|(cp, _)| cp.clone()).collect()
    }

    fn clamp_selection(&mut self) {
        if self.cells.is_empty() {
            self.cells.push(Cell::empty(CellKind::Code));
        }
        if self.selected >= self.cells.len() {
            self.selected = self.cells.len() - 1;
        }
    }
}

impl NotebookController for LocalNotebook {
    fn new_notebook(&mut self) {
        tracing::info!("starting a new notebook");
        self.cells = vec![Cell::empty(CellKind::Code)];
        self.selected = 0;
        self.dirty = false;
        self.undelete_stack.clear();
    }

    fn copy_notebook(&mut self) {
        self.name = format!("{}-Copy0", self.name);
        self.dirty = true;
        tracing::info!(name = %self.name, "copied notebook");
    }

    fn notebook_name(&self) -> String {
        self.name.clone()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn save_notebook(&mut self, options: SaveOptions) -> Result<(), NotebookError> {
        tracing::info!(asynchronous = options.asynchronous, "saving notebook");
        self.dirty = false;
        Ok(())
    }

    fn save_checkpoint(&mut self) {
        if let Err(e) = self.save_notebook(SaveOptions::default()) {
            tracing::warn!(error = %e, "save failed; checkpoint not created");
            return;
        }

        let checkpoint = Checkpoint {
            id: CheckpointId::new(Uuid::new_v4().to_string()),
            last_modified: Utc::now(),
        };
        self.checkpoints.push((checkpoint, self.cells.clone()));
        self.bus
            .publish(&NotebookEvent::CheckpointCreated(self.checkpoint_list()));
    }

    fn restore_checkpoint_dialog(&mut self, checkpoint: &Checkpoint) {
        // Standalone runs have no modal layer; restore directly.
        let Some((_, snapshot)) = self.checkpoints.iter().find(|(cp, _)| cp.id == checkpoint.id)
        else {
            tracing::warn!(id = %checkpoint.id, "unknown checkpoint");
            return;
        };
        self.cells = snapshot.clone();
        self.dirty = false;
        self.clamp_selection();
        tracing::info!(id = %checkpoint.id, "restored checkpoint");
    }

    fn edit_metadata(&mut self) {
        tracing::info!("metadata editor requested");
    }

    fn cut_cell(&mut self) {
        let cell = self.cells.remove(self.selected);
        self.clipboard = Some(cell);
        self.clamp_selection();
        self.dirty = true;
    }

    fn copy_cell(&mut self) {
        self.clipboard = Some(self.cells[self.selected].clone());
    }

    fn delete_cell(&mut self) {
        let cell = self.cells.remove(self.selected);
        self.undelete_stack.push((self.selected, cell));
        self.clamp_selection();
        self.dirty = true;
    }

    fn undelete_cell(&mut self) {
        let Some((index, cell)) = self.undelete_stack.pop() else {
            return;
        };
        let index = index.min(self.cells.len());
        self.cells.insert(index, cell);
        self.selected = index;
        self.dirty = true;
    }

    fn split_cell(&mut self) {
        let kind = self.cells[self.selected].kind;
        self.cells.insert(self.selected + 1, Cell::empty(kind));
        self.dirty = true;
    }

    fn merge_cell_above(&mut self) {
        if self.selected == 0 {
            return;
        }
        let cell = self.cells.remove(self.selected);
        self.selected -= 1;
        let target = self.selected_cell_mut();
        if !cell.source.is_empty() {
            target.source.push('\n');
            target.source.push_str(&cell.source);
        }
        self.dirty = true;
    }

    fn merge_cell_below(&mut self) {
        if self.selected + 1 >= self.cells.len() {
            return;
        }
        let cell = self.cells.remove(self.selected + 1);
        let target = self.selected_cell_mut();
        if !cell.source.is_empty() {
            target.source.push('\n');
            target.source.push_str(&cell.source);
        }
        self.dirty = true;
    }

    fn move_cell_up(&mut self) {
        if self.selected == 0 {
            return;
        }
        self.cells.swap(self.selected, self.selected - 1);
        self.selected -= 1;
        self.dirty = true;
    }

    fn move_cell_down(&mut self) {
        if self.selected + 1 >= self.cells.len() {
            return;
        }
        self.cells.swap(self.selected, self.selected + 1);
        self.selected += 1;
        self.dirty = true;
    }

    fn insert_cell_above(&mut self, cell_type: CellType) {
        self.cells.insert(self.selected, Cell::empty(cell_type.into()));
        self.dirty = true;
    }

    fn insert_cell_below(&mut self, cell_type: CellType) {
        self.cells
            .insert(self.selected + 1, Cell::empty(cell_type.into()));
        self.selected += 1;
        self.dirty = true;
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.cells.len() {
            self.selected += 1;
        }
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn select(&mut self, index: usize) {
        if index < self.cells.len() {
            self.selected = index;
        }
    }

    fn execute_selected_cell(&mut self, options: ExecuteOptions) {
        let index = self.selected;
        let cell = self.selected_cell_mut();
        cell.output = Some(format!("executed cell {index}"));
        if !options.terminal {
            self.select_next();
        }
    }

    fn execute_all_cells(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            cell.output = Some(format!("executed cell {index}"));
        }
    }

    fn execute_cells_above(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate().take(self.selected) {
            cell.output = Some(format!("executed cell {index}"));
        }
    }

    fn execute_cells_below(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate().skip(self.selected) {
            cell.output = Some(format!("executed cell {index}"));
        }
    }

    fn to_code(&mut self) {
        self.set_kind(CellKind::Code);
    }

    fn to_markdown(&mut self) {
        self.set_kind(CellKind::Markdown);
    }

    fn to_raw(&mut self) {
        self.set_kind(CellKind::Raw);
    }

    fn to_heading(&mut self, level: HeadingLevel) {
        self.set_kind(CellKind::Heading(level.level()));
    }

    fn toggle_output(&mut self) {
        let cell = self.selected_cell_mut();
        cell.output_collapsed = !cell.output_collapsed;
    }

    fn collapse_all_output(&mut self) {
        for cell in &mut self.cells {
            cell.output_collapsed = true;
        }
    }

    fn scroll_all_output(&mut self) {
        // Scrolled output is a rendering concern; collapsing is the closest
        // document-level effect.
        self.collapse_all_output();
    }

    fn expand_all_output(&mut self) {
        for cell in &mut self.cells {
            cell.output_collapsed = false;
        }
    }

    fn clear_all_output(&mut self) {
        for cell in &mut self.cells {
            cell.output = None;
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> (LocalNotebook, nbw_core::EventSubscription) {
        let bus = EventBus::new();
        let sub = bus.subscribe();
        (LocalNotebook::new("Untitled0", bus), sub)
    }

    #[test]
    fn insert_below_selects_the_new_cell() {
        let (mut nb, _sub) = notebook();
        nb.insert_cell_below(CellType::Markdown);
        assert_eq!(nb.cells().len(), 2);
        assert_eq!(nb.selected_index(), 1);
        assert_eq!(nb.cells()[1].kind, CellKind::Markdown);
    }

    #[test]
    fn delete_then_undelete_round_trips() {
        let (mut nb, _sub) = notebook();
        nb.insert_cell_below(CellType::Code);
        nb.cells[1].source = "x = 1".to_owned();

        nb.delete_cell();
        assert_eq!(nb.cells().len(), 1);

        nb.undelete_cell();
        assert_eq!(nb.cells().len(), 2);
        assert_eq!(nb.cells()[1].source, "x = 1");
    }

    #[test]
    fn deleting_the_last_cell_leaves_one_empty_cell() {
        let (mut nb, _sub) = notebook();
        nb.delete_cell();
        assert_eq!(nb.cells().len(), 1);
        assert_eq!(nb.selected_index(), 0);
    }

    #[test]
    fn save_checkpoint_publishes_the_full_list() {
        let (mut nb, sub) = notebook();
        nb.save_checkpoint();
        nb.save_checkpoint();

        let events = sub.drain();
        assert_eq!(events.len(), 2);
        match &events[1] {
            NotebookEvent::CheckpointCreated(list) => assert_eq!(list.len(), 2),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn restore_reverts_to_the_snapshot() {
        let (mut nb, sub) = notebook();
        nb.cells[0].source = "before".to_owned();
        nb.save_checkpoint();

        let checkpoint = match sub.drain().pop().unwrap() {
            NotebookEvent::CheckpointCreated(mut list) => list.pop().unwrap(),
            other => panic!("unexpected event {other:?}"),
        };

        nb.cells[0].source = "after".to_owned();
        nb.insert_cell_below(CellType::Raw);

        nb.restore_checkpoint_dialog(&checkpoint);
        assert_eq!(nb.cells().len(), 1);
        assert_eq!(nb.cells()[0].source, "before");
        assert!(!nb.is_dirty());
    }

    #[test]
    fn heading_conversion_records_the_level() {
        let (mut nb, _sub) = notebook();
        nb.to_heading(HeadingLevel::H3);
        assert_eq!(nb.cells()[0].kind, CellKind::Heading(3));
    }

    #[test]
    fn run_advances_selection_but_run_in_place_does_not() {
        let (mut nb, _sub) = notebook();
        nb.insert_cell_below(CellType::Code);
        nb.select(0);

        nb.execute_selected_cell(ExecuteOptions { terminal: true });
        assert_eq!(nb.selected_index(), 0);

        nb.execute_selected_cell(ExecuteOptions::default());
        assert_eq!(nb.selected_index(), 1);
    }
}
