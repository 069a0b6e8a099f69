mod model;
mod sample;
mod store;

pub use model::{CENTER_ID, Person, Project, Relationship};
pub use sample::sample_project;
pub use store::{load_project, save_project};
