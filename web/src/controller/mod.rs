pub(crate) mod health_check_controller;
pub(crate) mod meeting_analysis_controller;
pub(crate) mod smart_assistant_controller;
pub(crate) mod webhook_controller;
