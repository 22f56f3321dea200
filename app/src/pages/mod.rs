//! One view per route.

mod about;
mod blog_detail;
mod blogs;
mod contact;
mod home;
mod not_found;
mod projects;

pub use about::About;
pub use blog_detail::BlogDetail;
pub use blogs::Blogs;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
