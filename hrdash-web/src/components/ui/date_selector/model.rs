use chrono::NaiveDate;
use hrdash_calendar::{Commit, DateSelectorState};
use std::rc::Rc;
use yew::Reducible;

/// Reducer wrapper so document listeners registered at open time act on the
/// current state instead of the snapshot they captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorModel(pub DateSelectorState);

#[derive(Debug, Clone)]
pub enum SelectorAction {
    /// Replace the state with one computed by an event handler.
    Apply(DateSelectorState),
    /// Outside pointer-down or Escape.
    Dismiss,
    /// The host's controlled value changed.
    Sync(Option<NaiveDate>),
}

impl Reducible for SelectorModel {
    type Action = SelectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectorAction::Apply(next) if next == self.0 => self,
            SelectorAction::Apply(next) => Rc::new(Self(next)),
            SelectorAction::Dismiss if !self.0.is_open() => self,
            SelectorAction::Dismiss => {
                let mut next = self.0.clone();
                next.close();
                Rc::new(Self(next))
            }
            SelectorAction::Sync(value) if self.0.selected() == value => self,
            SelectorAction::Sync(value) => {
                let mut next = self.0.clone();
                next.sync_value(value);
                Rc::new(Self(next))
            }
        }
    }
}

/// Run `op` against a copy of `current`, returning the new state and the
/// commit, if the operation produced one.
pub fn step(
    current: &DateSelectorState,
    op: impl FnOnce(&mut DateSelectorState) -> Option<Commit>,
) -> (DateSelectorState, Option<Commit>) {
    let mut next = current.clone();
    let commit = op(&mut next);
    (next, commit)
}
