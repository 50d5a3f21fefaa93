mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod clients;
pub use clients::Clients;

mod client_form;
pub use client_form::ClientForm;

mod visit_form;
pub use visit_form::VisitForm;

mod nav;
pub(crate) use nav::BottomNav;

use chrono::NaiveDate;

/// Today's calendar date in the device timezone.
pub(crate) fn current_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}
