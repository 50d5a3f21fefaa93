//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod notify;
pub use notify::{
    notify, use_notifier, Notice, NoticeLevel, NotificationArea, NotificationProvider,
    Notifications,
};

mod geolocation;
pub use geolocation::{request_position, GeoFix, GeoLocationButton};

mod live;
pub use live::{use_client_snapshot, use_visit_snapshot, Snapshot};

mod visits_chart;
pub use visits_chart::VisitsChart;

mod location_map;
pub use location_map::{LocationMap, LocationMapMultiple, MapPoint};

mod client_card;
pub use client_card::ClientCard;

mod navbar;
pub use navbar::Navbar;

pub mod icons;
