pub mod projects;
pub mod session;
pub mod site_config;
pub mod skills;
pub mod store;
