//! Login service configuration.

/// Configuration for the login orchestration service.
#[derive(Debug, Clone)]
pub struct LoginServiceConfig {
    /// Message sent with the post-login notification
    pub notify_message: String,
}

impl Default for LoginServiceConfig {
    fn default() -> Self {
        Self {
            notify_message: "บันทึกสำเร็จ".to_string(),
        }
    }
}
