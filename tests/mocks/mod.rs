pub mod mock_webhook;

pub use mock_webhook::MockWebhook;
