pub mod section;

pub use section::{CallToAction, CtaAction, ScrollCommand, SectionId};
