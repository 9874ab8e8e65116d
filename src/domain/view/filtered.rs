//! Filtered views over the aggregate's collections.
//!
//! A view is a pair of (source, predicate). Neither copies the source:
//! reads borrow the live collection and yield references to the items the
//! predicate accepts. Replacing the predicate and rebinding the source are
//! separate, explicit operations.

use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::SessionName;
use crate::domain::record::StudentRecord;
use crate::domain::session::SessionList;

use super::{Predicate, ShowAll};

/// A replaceable predicate applied to a borrowed source slice.
pub struct FilteredView<T> {
    predicate: Arc<dyn Predicate<T>>,
}

impl<T: 'static> FilteredView<T> {
    /// Creates a view that shows every item.
    pub fn show_all() -> Self {
        Self {
            predicate: Arc::new(ShowAll),
        }
    }

    /// Replaces the predicate; affects every subsequent read.
    pub fn set_predicate(&mut self, predicate: impl Predicate<T> + 'static) {
        self.predicate = Arc::new(predicate);
    }

    /// Returns the items of `source` that pass the predicate, in order.
    pub fn apply<'a>(&self, source: &'a [T]) -> Vec<&'a T> {
        source.iter().filter(|item| self.predicate.test(item)).collect()
    }
}

impl<T: 'static> Default for FilteredView<T> {
    fn default() -> Self {
        Self::show_all()
    }
}

impl<T> Clone for FilteredView<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for FilteredView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredView").finish_non_exhaustive()
    }
}

/// Filtered view over the records of one session.
///
/// Unlike the student and session views, the source of this view moves:
/// switching sessions rebinds it to the new session's records and resets
/// its predicate. An unbound view reads as empty.
#[derive(Debug, Clone, Default)]
pub struct RecordView {
    source: Option<SessionName>,
    filter: FilteredView<StudentRecord>,
}

impl RecordView {
    /// Creates a view bound to no session.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Points the view at `session` and shows all of its records.
    pub fn rebind(&mut self, session: SessionName) {
        self.source = Some(session);
        self.filter = FilteredView::show_all();
    }

    /// Detaches the view from any session.
    pub fn unbind(&mut self) {
        self.source = None;
        self.filter = FilteredView::show_all();
    }

    /// Returns the session this view reads from.
    pub fn source(&self) -> Option<&SessionName> {
        self.source.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.source.is_some()
    }

    /// Replaces the predicate without changing the source.
    pub fn set_predicate(&mut self, predicate: impl Predicate<StudentRecord> + 'static) {
        self.filter.set_predicate(predicate);
    }

    /// Returns the accepted records of the bound session, or nothing when
    /// unbound.
    pub fn apply<'a>(&self, sessions: &'a SessionList) -> Vec<&'a StudentRecord> {
        match self.source.as_ref().and_then(|name| sessions.get(name).ok()) {
            Some(session) => self.filter.apply(session.records().as_slice()),
            None => Vec::new(),
        }
    }
}
