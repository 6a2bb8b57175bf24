mod analytics;
pub use analytics::AnalyticsView;

mod user_manage;
pub use user_manage::UserManageView;

mod user_profile;
pub use user_profile::UserProfileView;

mod settings;
pub use settings::SettingsView;
