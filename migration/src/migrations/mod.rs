pub mod m202506010001_create_classes;
pub mod m202506010002_create_folders;
pub mod m202506010003_create_documents;
