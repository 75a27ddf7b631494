//! State of the booking details page: loading a booking with its rides,
//! inspecting single rides, and the pure helpers the page renders with.

pub mod i18n;
pub mod inspector;
pub mod loader;
pub mod navigation;
pub mod presentation;
pub mod source;
pub mod summary;
pub mod table;
pub mod view;

#[cfg(test)]
mod fake;

pub use i18n::Messages;
pub use inspector::RideInspector;
pub use loader::BookingLoader;
pub use source::{BookingSource, Redirect};
pub use view::{DetailView, LoadedBooking, ViewState};

use payloads::Role;
use std::rc::Rc;

/// Loader and inspector wired to one view, plus the session role the page
/// was opened with.
pub struct BookingDetails<S> {
    pub view: DetailView,
    pub loader: BookingLoader<S>,
    pub inspector: RideInspector<S>,
    role: Option<Role>,
}

impl<S: BookingSource> BookingDetails<S> {
    pub fn new(
        source: S,
        redirect: impl Redirect + 'static,
        role: Option<Role>,
    ) -> Self {
        Self::with_view(DetailView::new(), source, redirect, role)
    }

    pub fn with_view(
        view: DetailView,
        source: S,
        redirect: impl Redirect + 'static,
        role: Option<Role>,
    ) -> Self {
        let source = Rc::new(source);
        let redirect: Rc<dyn Redirect> = Rc::new(redirect);
        Self {
            loader: BookingLoader::new(
                source.clone(),
                view.clone(),
                redirect.clone(),
            ),
            inspector: RideInspector::new(source, view.clone(), redirect),
            view,
            role,
        }
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Whether the ride overlay may show customer contact fields.
    pub fn can_view_contact(&self) -> bool {
        self.role.as_ref().is_some_and(Role::can_view_contact)
    }
}
