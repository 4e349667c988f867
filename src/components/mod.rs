//! UI Components
//!
//! Page sections and controls.

mod header;
mod hero;
mod services;
mod portfolio;
mod filter_bar;
mod testimonials;
mod contact_form;
mod footer;

pub use header::Header;
pub use hero::Hero;
pub use services::Services;
pub use portfolio::PortfolioSection;
pub use filter_bar::FilterBar;
pub use testimonials::TestimonialsSection;
pub use contact_form::ContactSection;
pub use footer::Footer;
