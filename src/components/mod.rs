mod filter_bar;
mod header;
mod project_card;
mod project_grid;
mod projects_placeholder;
mod toast;

pub use filter_bar::FilterBar;
pub use header::Header;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use projects_placeholder::ProjectsPlaceholder;
pub use toast::ErrorToast;
