pub mod class;
pub mod document;
pub mod folder;

pub use class::Entity as Class;
pub use document::Entity as Document;
pub use folder::Entity as Folder;
