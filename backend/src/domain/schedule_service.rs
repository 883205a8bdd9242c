//! Owner of the in-memory booking state.
//!
//! Availability and the booking list are process-wide. Admin login, the
//! visible calendar month and the booking dialog belong to one client and are
//! kept per [`SessionId`]. Everything sits in one `ScheduleState` behind a
//! single mutex. Each method locks once and runs to completion, so a booking's
//! slot removal and its record are never observed separately.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use shared::CalendarMonth;
use tracing::{debug, info, warn};

use crate::domain::commands::booking::{ConfirmBookingCommand, WorkflowSnapshot};
use crate::domain::commands::slots::{RecurringSlotsCommand, RemoveSlotResult, SlotCommand};
use crate::domain::models::{Booking, SelectedSlot, SessionId, SlotDate, YearMonth};
use crate::domain::{
    AdminSession, BookingRecorder, BookingWorkflow, CalendarView, Credentials, ExportService,
    ExportedFile, SlotStore,
};
use crate::error::BookingError;

/// State owned by one browser client
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub admin: AdminSession,
    pub calendar: CalendarView,
    pub workflow: BookingWorkflow,
}

impl ClientSession {
    pub fn new(focus: YearMonth) -> Self {
        Self {
            admin: AdminSession::new(),
            calendar: CalendarView::new(focus),
            workflow: BookingWorkflow::new(),
        }
    }
}

#[derive(Debug)]
pub struct ScheduleState {
    pub slots: SlotStore,
    pub bookings: BookingRecorder,
    pub sessions: HashMap<SessionId, ClientSession>,
    /// Month a new client's calendar opens on
    pub initial_focus: YearMonth,
}

impl ScheduleState {
    pub fn new(slots: SlotStore, initial_focus: YearMonth) -> Self {
        Self {
            slots,
            bookings: BookingRecorder::new(),
            sessions: HashMap::new(),
            initial_focus,
        }
    }

    fn client(&self, session: SessionId) -> Option<&ClientSession> {
        self.sessions.get(&session)
    }

    /// Shared stores plus this client's session, created on first use
    fn parts_mut(
        &mut self,
        session: SessionId,
    ) -> (&mut SlotStore, &mut BookingRecorder, &mut ClientSession) {
        let focus = self.initial_focus;
        let client = self.sessions.entry(session).or_insert_with(|| {
            debug!("New client session {}", session);
            ClientSession::new(focus)
        });
        (&mut self.slots, &mut self.bookings, client)
    }

    fn require_admin(&self, session: SessionId) -> Result<(), BookingError> {
        match self.client(session) {
            Some(client) => client.admin.require_admin(),
            None => Err(BookingError::NotAuthorized),
        }
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::new(SlotStore::new(), YearMonth::current())
    }
}

#[derive(Clone)]
pub struct ScheduleService {
    state: Arc<Mutex<ScheduleState>>,
    credentials: Credentials,
    export_service: ExportService,
}

impl ScheduleService {
    pub fn new(state: ScheduleState, credentials: Credentials) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            credentials,
            export_service: ExportService::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn lock(&self) -> Result<MutexGuard<'_, ScheduleState>, BookingError> {
        self.state
            .lock()
            .map_err(|_| BookingError::Internal("schedule state lock poisoned".to_string()))
    }

    // Admin session

    pub fn admin_login(&self, session: SessionId, password: &str) -> Result<(), BookingError> {
        let mut state = self.lock()?;
        let (_, _, client) = state.parts_mut(session);
        client.admin.login(password, &self.credentials)
    }

    pub fn admin_logout(&self, session: SessionId) -> Result<(), BookingError> {
        let mut state = self.lock()?;
        if let Some(client) = state.sessions.get_mut(&session) {
            client.admin.logout();
        }
        Ok(())
    }

    pub fn is_admin(&self, session: SessionId) -> Result<bool, BookingError> {
        let state = self.lock()?;
        Ok(state
            .client(session)
            .map_or(false, |client| client.admin.is_authenticated()))
    }

    // Slot store

    /// Every date with its time labels, emptied dates included
    pub fn availability(&self) -> Result<Vec<(SlotDate, Vec<String>)>, BookingError> {
        let state = self.lock()?;
        Ok(state
            .slots
            .iter()
            .map(|(date, times)| (*date, times.clone()))
            .collect())
    }

    pub fn slots_for(&self, date: SlotDate) -> Result<Vec<String>, BookingError> {
        Ok(self.lock()?.slots.slots_for(date).to_vec())
    }

    pub fn add_slot(&self, session: SessionId, command: SlotCommand) -> Result<Vec<String>, BookingError> {
        let mut state = self.lock()?;
        state.require_admin(session)?;
        validate_time_label(&command.time)?;

        state.slots.add_slot(command.date, &command.time);
        info!("Admin added slot {} on {}", command.time, command.date);
        Ok(state.slots.slots_for(command.date).to_vec())
    }

    pub fn add_recurring_slots(
        &self,
        session: SessionId,
        command: RecurringSlotsCommand,
    ) -> Result<Vec<SlotDate>, BookingError> {
        let mut state = self.lock()?;
        state.require_admin(session)?;
        validate_time_label(&command.time)?;

        state
            .slots
            .add_recurring_slots(command.month, &command.weekdays, &command.time)
    }

    pub fn remove_slot(
        &self,
        session: SessionId,
        command: SlotCommand,
    ) -> Result<RemoveSlotResult, BookingError> {
        let mut state = self.lock()?;
        state.require_admin(session)?;

        let removed = state.slots.remove_slot(command.date, &command.time);
        if removed == 0 {
            warn!("Admin removal matched nothing: {} on {}", command.time, command.date);
        }
        Ok(RemoveSlotResult {
            removed,
            remaining: state.slots.slots_for(command.date).to_vec(),
        })
    }

    // Bookings and export

    pub fn bookings(&self, session: SessionId) -> Result<Vec<Booking>, BookingError> {
        let state = self.lock()?;
        state.require_admin(session)?;
        Ok(state.bookings.bookings().to_vec())
    }

    pub fn export_bookings(&self, session: SessionId) -> Result<ExportedFile, BookingError> {
        let bookings = self.bookings(session)?;
        self.export_service.export_bookings(&bookings)
    }

    // Calendar view

    pub fn calendar_month(&self, session: SessionId, today: SlotDate) -> Result<CalendarMonth, BookingError> {
        let state = self.lock()?;
        let month = match state.client(session) {
            Some(client) => client.calendar.month_view(&state.slots, today),
            None => CalendarView::new(state.initial_focus).month_view(&state.slots, today),
        };
        Ok(month)
    }

    pub fn next_month(&self, session: SessionId, today: SlotDate) -> Result<CalendarMonth, BookingError> {
        let mut state = self.lock()?;
        let (slots, _, client) = state.parts_mut(session);
        client.calendar.next_month();
        Ok(client.calendar.month_view(slots, today))
    }

    pub fn previous_month(&self, session: SessionId, today: SlotDate) -> Result<CalendarMonth, BookingError> {
        let mut state = self.lock()?;
        let (slots, _, client) = state.parts_mut(session);
        client.calendar.previous_month();
        Ok(client.calendar.month_view(slots, today))
    }

    pub fn hover_date(
        &self,
        session: SessionId,
        date: SlotDate,
        today: SlotDate,
    ) -> Result<CalendarMonth, BookingError> {
        let mut state = self.lock()?;
        let (slots, _, client) = state.parts_mut(session);
        client.calendar.hover(date);
        Ok(client.calendar.month_view(slots, today))
    }

    pub fn leave_date(&self, session: SessionId, today: SlotDate) -> Result<CalendarMonth, BookingError> {
        let mut state = self.lock()?;
        let (slots, _, client) = state.parts_mut(session);
        client.calendar.leave();
        Ok(client.calendar.month_view(slots, today))
    }

    // Booking workflow

    pub fn workflow(&self, session: SessionId) -> Result<WorkflowSnapshot, BookingError> {
        let state = self.lock()?;
        Ok(match state.client(session) {
            Some(client) => snapshot(&client.workflow),
            None => snapshot(&BookingWorkflow::new()),
        })
    }

    pub fn select_slot(&self, session: SessionId, command: SlotCommand) -> Result<WorkflowSnapshot, BookingError> {
        let mut state = self.lock()?;
        let (slots, _, client) = state.parts_mut(session);
        client
            .workflow
            .select(SelectedSlot::new(command.date, command.time), slots)?;
        Ok(snapshot(&client.workflow))
    }

    /// Book the client's selected slot; the snapshot is taken under the same lock
    pub fn confirm_booking(
        &self,
        session: SessionId,
        command: ConfirmBookingCommand,
    ) -> Result<WorkflowSnapshot, BookingError> {
        let mut state = self.lock()?;
        let (slots, bookings, client) = state.parts_mut(session);
        client.workflow.submit(
            &command.email,
            &command.one_time_password,
            &self.credentials,
            slots,
            bookings,
        )?;
        Ok(snapshot(&client.workflow))
    }

    pub fn cancel_booking(&self, session: SessionId) -> Result<WorkflowSnapshot, BookingError> {
        let mut state = self.lock()?;
        let (_, _, client) = state.parts_mut(session);
        client.workflow.cancel();
        Ok(snapshot(&client.workflow))
    }
}

fn snapshot(workflow: &BookingWorkflow) -> WorkflowSnapshot {
    WorkflowSnapshot {
        status: workflow.status(),
        selected: workflow.selected().cloned(),
        booking: workflow.confirmed_booking().cloned(),
    }
}

fn validate_time_label(time: &str) -> Result<(), BookingError> {
    if time.trim().is_empty() {
        return Err(BookingError::EmptyTimeLabel);
    }
    Ok(())
}
