mod classes_test;
mod documents_test;
mod folders_test;
mod health_test;
mod storage_test;
mod upload_test;
