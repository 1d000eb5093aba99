mod contact;
mod hero;
mod intro;
mod nav;
mod page_view;
mod popup;
mod showcase;
mod skills;
mod status_bar;
pub mod text;

pub use contact::ContactWidget;
pub use hero::HeroWidget;
pub use intro::IntroWidget;
pub use nav::NavWidget;
pub use page_view::PageView;
pub use popup::PopupWidget;
pub use showcase::{track_cells, ShowcaseWidget, TrackCell};
pub use skills::SkillsWidget;
pub use status_bar::StatusBarWidget;
