mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod creator_dashboard;
pub use creator_dashboard::CreatorDashboard;

mod promoter_dashboard;
pub use promoter_dashboard::PromoterDashboard;

mod admin;
pub use admin::AdminPanel;
