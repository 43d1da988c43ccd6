pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navigation;

pub use about::AboutView;
pub use contact::ContactView;
pub use experience::{ExperienceCard, ExperienceView};
pub use footer::FooterView;
pub use hero::HeroView;
pub use navigation::{NavLink, Navigation};
