pub mod ai_service;
pub mod email;
pub mod error;
pub mod folder_service;
pub mod grading;
pub mod service;
pub mod storage;
pub mod submission;
