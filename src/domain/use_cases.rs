pub mod auth;
pub mod projects;
pub mod session;
pub mod site;
pub mod skills;
