//! Single-choice selections made while scheduling an appointment.

use tracing::debug;

use crate::models::{Professional, TimeSlot};

/// Current `(professional, time slot)` pair. Either side may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub professional_id: Option<String>,
    pub time_slot: Option<TimeSlot>,
}

/// One professional and one time slot at most, last write wins.
///
/// Neither setter validates its argument against the loaded professionals or
/// the offered slots. Confirming the booking is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_professional_id: Option<String>,
    selected_time_slot: Option<TimeSlot>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_professional(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(professional_id = %id, "professional selected");
        self.selected_professional_id = Some(id);
    }

    pub fn select_time_slot(&mut self, time: impl Into<TimeSlot>) {
        let time = time.into();
        debug!(time_slot = %time, "time slot selected");
        self.selected_time_slot = Some(time);
    }

    pub fn selection(&self) -> Selection {
        Selection {
            professional_id: self.selected_professional_id.clone(),
            time_slot: self.selected_time_slot.clone(),
        }
    }

    pub fn professional_id(&self) -> Option<&str> {
        self.selected_professional_id.as_deref()
    }

    pub fn time_slot(&self) -> Option<&TimeSlot> {
        self.selected_time_slot.as_ref()
    }

    /// True once both a professional and a time slot are chosen.
    pub fn is_complete(&self) -> bool {
        self.selected_professional_id.is_some() && self.selected_time_slot.is_some()
    }

    pub fn clear(&mut self) {
        self.selected_professional_id = None;
        self.selected_time_slot = None;
    }
}

// ---------------------------------------------------------------------------
// SchedulingSession
// ---------------------------------------------------------------------------

/// Selection state paired with the professionals and slots a scheduling
/// screen offers.
pub struct SchedulingSession<'a> {
    professionals: &'a [Professional],
    time_slots: &'a [TimeSlot],
    state: SelectionState,
}

impl<'a> SchedulingSession<'a> {
    pub fn new(professionals: &'a [Professional], time_slots: &'a [TimeSlot]) -> Self {
        Self {
            professionals,
            time_slots,
            state: SelectionState::new(),
        }
    }

    pub fn professionals(&self) -> &'a [Professional] {
        self.professionals
    }

    pub fn time_slots(&self) -> &'a [TimeSlot] {
        self.time_slots
    }

    pub fn select_professional(&mut self, id: impl Into<String>) {
        self.state.select_professional(id);
    }

    pub fn select_time_slot(&mut self, time: impl Into<TimeSlot>) {
        self.state.select_time_slot(time);
    }

    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    /// The selected professional, if the selected id names a loaded one.
    pub fn selected_professional(&self) -> Option<&'a Professional> {
        let id = self.state.professional_id()?;
        self.professionals.iter().find(|p| p.id == id)
    }

    /// Whether the selected slot is one this screen offers.
    pub fn is_offered_slot_selected(&self) -> bool {
        self.state
            .time_slot()
            .map(|slot| self.time_slots.contains(slot))
            .unwrap_or(false)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn into_state(self) -> SelectionState {
        self.state
    }
}
