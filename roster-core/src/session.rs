//! A running roster: the stored document, the displayed week and a clock.
//!
//! Every action that changes what is on screen returns the freshly built view.
//! A navigation that would leave the calendar returns an error and keeps the
//! displayed week.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::document::ScheduleDocument;
use crate::edit::{NamesDraft, RosterDraft};
use crate::error::RosterResult;
use crate::navigation::Navigator;
use crate::store::{DocumentOrigin, KeyValueStore, SaveStatus, ScheduleStore};
use crate::view::{WeekView, build_view};

/// Outcome of saving an edit.
#[derive(Debug, Clone)]
pub struct Saved {
    pub view: WeekView,
    pub status: SaveStatus,
}

pub struct Session {
    store: ScheduleStore,
    navigator: Navigator,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn open(storage: Box<dyn KeyValueStore>, key: &str, clock: Box<dyn Clock>) -> RosterResult<Self> {
        let today = clock.today();
        let navigator = Navigator::new(today)?;
        Ok(Session {
            store: ScheduleStore::load(storage, key, today),
            navigator,
            clock,
        })
    }

    pub fn document(&self) -> &ScheduleDocument {
        self.store.document()
    }

    pub fn origin(&self) -> &DocumentOrigin {
        self.store.origin()
    }

    pub fn view_monday(&self) -> NaiveDate {
        self.navigator.view_monday()
    }

    pub fn render(&self) -> WeekView {
        build_view(self.store.document(), self.navigator.week(), self.clock.today())
    }

    // NAVIGATION:

    pub fn prev_week(&mut self) -> RosterResult<WeekView> {
        self.navigator.prev()?;
        Ok(self.render())
    }

    pub fn next_week(&mut self) -> RosterResult<WeekView> {
        self.navigator.next()?;
        Ok(self.render())
    }

    pub fn shift_weeks(&mut self, weeks: i64) -> RosterResult<WeekView> {
        self.navigator.shift_weeks(weeks)?;
        Ok(self.render())
    }

    pub fn this_week(&mut self) -> RosterResult<WeekView> {
        self.navigator.this_week(self.clock.today())?;
        Ok(self.render())
    }

    pub fn jump_to(&mut self, date: NaiveDate) -> RosterResult<WeekView> {
        self.navigator.jump_to(date)?;
        Ok(self.render())
    }

    // EDITING:

    pub fn edit_names(&self) -> NamesDraft {
        NamesDraft::open(self.store.document())
    }

    pub fn save_names(&mut self, draft: NamesDraft) -> Saved {
        let next = draft.commit(self.store.document());
        self.replace(next)
    }

    pub fn edit_roster(&self) -> RosterDraft {
        RosterDraft::open(self.store.document())
    }

    pub fn save_roster(&mut self, draft: RosterDraft) -> Saved {
        let next = draft.commit(self.store.document());
        self.replace(next)
    }

    fn replace(&mut self, next: ScheduleDocument) -> Saved {
        let status = self.store.save(next);
        Saved {
            view: self.render(),
            status,
        }
    }
}
