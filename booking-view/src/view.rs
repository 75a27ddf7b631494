//! Shared state of the booking details page.
//!
//! The loader owns the booking/rides pair and the inspector owns the
//! displayed-ride slot; both write through the same [`DetailView`] so the
//! not-found signal has a single home. Every load is tagged with a
//! generation number and results carrying an older tag are dropped.

use payloads::{BookingId, BookingRecord, RideDetail, RideSummary};
use std::cell::RefCell;
use std::rc::Rc;

/// What the details page is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// The route parameter is not a positive integer.
    Invalid,
    #[default]
    Loading,
    /// A redirect has been requested; nothing is rendered.
    Unauthorized,
    NotFound,
    Loaded(Rc<LoadedBooking>),
    /// Transport or decode failure, with a message for the user.
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A booking together with its rides. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBooking {
    pub booking: BookingRecord,
    pub rides: Vec<RideSummary>,
}

/// Identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub booking_id: BookingId,
    pub generation: u64,
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Inner {
    state: ViewState,
    active: Option<BookingId>,
    generation: u64,
    displayed_ride: Option<RideDetail>,
    listener: Option<Listener>,
}

/// Cloneable handle to the page state. Clones share the same state.
#[derive(Clone, Default)]
pub struct DetailView {
    inner: Rc<RefCell<Inner>>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view that calls `listener` after every change.
    pub fn with_listener(listener: impl Fn() + 'static) -> Self {
        let view = Self::new();
        view.set_listener(listener);
        view
    }

    /// Replace the change listener.
    pub fn set_listener(&self, listener: impl Fn() + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn state(&self) -> ViewState {
        self.inner.borrow().state.clone()
    }

    pub fn displayed_ride(&self) -> Option<RideDetail> {
        self.inner.borrow().displayed_ride.clone()
    }

    pub fn active_booking(&self) -> Option<BookingId> {
        self.inner.borrow().active
    }

    /// Ticket of the most recent load, if a valid booking is active.
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        let inner = self.inner.borrow();
        inner.active.map(|booking_id| LoadTicket {
            booking_id,
            generation: inner.generation,
        })
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current_ticket() == Some(ticket)
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin_load(&self, booking_id: BookingId) -> LoadTicket {
        self.update(|inner| {
            inner.generation += 1;
            inner.active = Some(booking_id);
            inner.state = ViewState::Loading;
            LoadTicket {
                booking_id,
                generation: inner.generation,
            }
        })
    }

    /// Enter the invalid-identifier state. In-flight loads become stale.
    pub fn mark_invalid(&self) {
        self.update(|inner| {
            inner.generation += 1;
            inner.active = None;
            inner.state = ViewState::Invalid;
        })
    }

    /// Replace the state if `ticket` is still current. Returns whether the
    /// state was applied.
    pub fn apply(&self, ticket: LoadTicket, state: ViewState) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.update(|inner| inner.state = state);
        true
    }

    pub fn mark_not_found(&self, ticket: LoadTicket) -> bool {
        self.apply(ticket, ViewState::NotFound)
    }

    /// Put a ride in the display slot if `ticket` is still current.
    pub fn show_ride(&self, ticket: LoadTicket, ride: RideDetail) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.update(|inner| inner.displayed_ride = Some(ride));
        true
    }

    pub fn dismiss_ride(&self) {
        self.update(|inner| inner.displayed_ride = None)
    }

    /// Mutate, release the borrow, then notify.
    fn update<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let (result, listener) = {
            let mut inner = self.inner.borrow_mut();
            let result = f(&mut inner);
            (result, inner.listener.clone())
        };
        if let Some(listener) = listener {
            listener();
        }
        result
    }
}

impl PartialEq for DetailView {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
