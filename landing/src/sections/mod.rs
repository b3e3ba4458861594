// Page sections, top to bottom

mod about;
mod admissions;
mod contact;
mod facilities;
mod footer;
mod hero;
mod links;
mod nav;
mod philosophy;
mod popup;
mod testimonials;

pub use about::About;
pub use admissions::Admissions;
pub use contact::Contact;
pub use facilities::Facilities;
pub use footer::Footer;
pub use hero::Hero;
pub use links::SectionLink;
pub use nav::Nav;
pub use philosophy::Philosophy;
pub use popup::Popup;
pub use testimonials::Testimonials;
