pub mod app;
pub mod mock_ai;

pub use app::{TestApp, make_test_app, make_test_app_with_ai};
pub use mock_ai::spawn_mock_ai;
pub use request::{json_request, multipart_request, send};
