pub mod class;
pub mod document;
pub mod folder;
