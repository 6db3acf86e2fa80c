use uuid::Uuid;

use crate::core::store::PortfolioStore;
use crate::models::{PortfolioRecord, Project};

/// The renderer tracks at most one drag at a time; all highlight styling is
/// derived from this value, never stored beside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: Uuid,
    },
}

/// Reorderable view of the persisted project list.
///
/// Holds the renderer's copy of the record plus the drag state machine. A
/// completed drop rewrites the whole record through the injected store, so the
/// stored order never lags the displayed one.
#[derive(Debug, Clone)]
pub struct ProjectBoard {
    record: PortfolioRecord,
    drag: DragState,
    hover: Option<Uuid>,
}

impl ProjectBoard {
    pub fn new(record: PortfolioRecord) -> Self {
        Self {
            record,
            drag: DragState::Idle,
            hover: None,
        }
    }

    pub fn record(&self) -> &PortfolioRecord {
        &self.record
    }

    pub fn projects(&self) -> &[Project] {
        &self.record.projects
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Begins a drag. Only valid from idle and only for a known project; a
    /// second press while dragging is ignored.
    pub fn drag_start(&mut self, id: Uuid) {
        if self.drag == DragState::Idle && self.record.project_position(id).is_some() {
            self.drag = DragState::Dragging { source: id };
        }
    }

    /// Marks `id` as the candidate drop target. Purely presentational, and
    /// tolerant of repeat events for the same target.
    pub fn drag_over(&mut self, id: Uuid) {
        if matches!(self.drag, DragState::Dragging { .. })
            && self.record.project_position(id).is_some()
        {
            self.hover = Some(id);
        }
    }

    pub fn drag_leave(&mut self, id: Uuid) {
        if self.hover == Some(id) {
            self.hover = None;
        }
    }

    /// Completes the drag on `target`: the source element is removed and
    /// reinserted at the target's pre-removal position (a move, not a swap),
    /// and the full record is written back immediately. Returns whether the
    /// order changed. Dropping with no drag active, onto the source itself,
    /// or onto an unknown id is a no-op.
    pub fn drop_on(&mut self, target: Uuid, store: &impl PortfolioStore) -> anyhow::Result<bool> {
        let DragState::Dragging { source } = self.drag else {
            self.hover = None;
            return Ok(false);
        };
        self.drag = DragState::Idle;
        self.hover = None;

        if source == target {
            return Ok(false);
        }
        let Some(from) = self.record.project_position(source) else {
            return Ok(false);
        };
        let Some(to) = self.record.project_position(target) else {
            return Ok(false);
        };

        let moved = self.record.projects.remove(from);
        self.record.projects.insert(to, moved);
        store.save(&self.record)?;
        Ok(true)
    }

    /// Always valid; clears drag and hover even when no drop fired (e.g. the
    /// pointer was released outside every card).
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
        self.hover = None;
    }

    pub fn is_drag_source(&self, id: Uuid) -> bool {
        matches!(self.drag, DragState::Dragging { source } if source == id)
    }

    pub fn is_drop_target(&self, id: Uuid) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
            && self.hover == Some(id)
            && !self.is_drag_source(id)
    }
}
