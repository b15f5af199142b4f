//! # Undo Records
//!
//! Every mutating edit produces one [`UndoRecord`] holding frozen copies of
//! the point buffer before and after the edit. Redo restores the frozen
//! `after` copy rather than re-running the edit, so it replays the same
//! result whatever happened to the live buffer in between.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use config::constants::MAX_UNDO_DEPTH;
use glam::DVec3;
use tracing::debug;

use crate::error::{SymmetryError, SymmetryResult};
use crate::host::{PointBuffer, UndoStack};

/// Lifecycle of an [`UndoRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoState {
    /// Freshly created, neither undo nor redo has run.
    Committed,
    /// Undo or redo has run at least once.
    Invoked,
}

/// Before/after snapshots of one edit.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::host::{InMemoryMesh, PointBuffer};
/// use sym_mesh::{UndoRecord, UndoState};
///
/// let mut mesh = InMemoryMesh::new("body", vec![DVec3::ONE]);
/// let mut record = UndoRecord::new(vec![DVec3::ZERO], vec![DVec3::ONE]);
/// assert_eq!(record.state(), UndoState::Committed);
///
/// record.undo(&mut mesh);
/// assert_eq!(mesh.points(), vec![DVec3::ZERO]);
/// record.redo(&mut mesh);
/// assert_eq!(mesh.points(), vec![DVec3::ONE]);
/// assert_eq!(record.state(), UndoState::Invoked);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UndoRecord {
    before: Vec<DVec3>,
    after: Vec<DVec3>,
    state: UndoState,
}

impl UndoRecord {
    /// Creates a record from owned snapshots.
    pub fn new(before: Vec<DVec3>, after: Vec<DVec3>) -> Self {
        Self {
            before,
            after,
            state: UndoState::Committed,
        }
    }

    /// Positions before the edit.
    pub fn before(&self) -> &[DVec3] {
        &self.before
    }

    /// Positions after the edit.
    pub fn after(&self) -> &[DVec3] {
        &self.after
    }

    /// Current lifecycle state.
    pub fn state(&self) -> UndoState {
        self.state
    }

    /// Indices whose position differs between the two snapshots.
    pub fn changed_indices(&self) -> Vec<usize> {
        self.before
            .iter()
            .zip(&self.after)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }

    /// Restores the pre-edit positions.
    pub fn undo<M: PointBuffer + ?Sized>(&mut self, mesh: &mut M) {
        mesh.set_points(&self.before);
        mesh.update_surface();
        self.state = UndoState::Invoked;
    }

    /// Restores the post-edit positions.
    pub fn redo<M: PointBuffer + ?Sized>(&mut self, mesh: &mut M) {
        mesh.set_points(&self.after);
        mesh.update_surface();
        self.state = UndoState::Invoked;
    }

    /// Splits the record into the `(undo, redo)` callback pair a host undo
    /// stack expects, both bound to the shared `mesh`.
    ///
    /// # Examples
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use glam::DVec3;
    /// use sym_mesh::host::{InMemoryMesh, PointBuffer};
    /// use sym_mesh::UndoRecord;
    ///
    /// let mesh = Rc::new(RefCell::new(InMemoryMesh::new("m", vec![DVec3::ONE])));
    /// let record = UndoRecord::new(vec![DVec3::ZERO], vec![DVec3::ONE]);
    /// let (mut undo, mut redo) = record.into_commands(Rc::clone(&mesh));
    /// undo();
    /// assert_eq!(mesh.borrow().points(), vec![DVec3::ZERO]);
    /// redo();
    /// assert_eq!(mesh.borrow().points(), vec![DVec3::ONE]);
    /// ```
    pub fn into_commands<M>(self, mesh: Rc<RefCell<M>>) -> (Box<dyn FnMut()>, Box<dyn FnMut()>)
    where
        M: PointBuffer + 'static,
    {
        let record = Rc::new(RefCell::new(self));
        let undo = {
            let record = Rc::clone(&record);
            let mesh = Rc::clone(&mesh);
            Box::new(move || record.borrow_mut().undo(&mut *mesh.borrow_mut())) as Box<dyn FnMut()>
        };
        let redo =
            Box::new(move || record.borrow_mut().redo(&mut *mesh.borrow_mut())) as Box<dyn FnMut()>;
        (undo, redo)
    }
}

/// Linear undo/redo history for hosts without their own undo stack.
///
/// Committing a new record drops everything that could have been redone:
/// records are superseded, never merged. At most [`MAX_UNDO_DEPTH`] records
/// are kept; the oldest is evicted first.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use sym_mesh::host::{InMemoryMesh, PointBuffer, UndoStack};
/// use sym_mesh::{History, UndoRecord};
///
/// let mut mesh = InMemoryMesh::new("m", vec![DVec3::ONE]);
/// let mut history = History::default();
/// history.commit(UndoRecord::new(vec![DVec3::ZERO], vec![DVec3::ONE]));
/// history.undo(&mut mesh).unwrap();
/// assert_eq!(mesh.points(), vec![DVec3::ZERO]);
/// assert!(history.can_redo());
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<UndoRecord>,
    redo: Vec<UndoRecord>,
}

impl History {
    /// Undoes the most recent record.
    pub fn undo<M: PointBuffer + ?Sized>(&mut self, mesh: &mut M) -> SymmetryResult<()> {
        let mut record = self.undo.pop_back().ok_or(SymmetryError::NothingToUndo)?;
        record.undo(mesh);
        debug!(remaining = self.undo.len(), "undo");
        self.redo.push(record);
        Ok(())
    }

    /// Redoes the most recently undone record.
    pub fn redo<M: PointBuffer + ?Sized>(&mut self, mesh: &mut M) -> SymmetryResult<()> {
        let mut record = self.redo.pop().ok_or(SymmetryError::NothingToRedo)?;
        record.redo(mesh);
        debug!(remaining = self.redo.len(), "redo");
        self.undo.push_back(record);
        Ok(())
    }

    /// True if there is something to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of records that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}

impl UndoStack for History {
    fn commit(&mut self, record: UndoRecord) {
        self.redo.clear();
        self.undo.push_back(record);
        while self.undo.len() > MAX_UNDO_DEPTH {
            self.undo.pop_front();
            debug!(limit = MAX_UNDO_DEPTH, "evicted oldest undo record");
        }
    }
}
