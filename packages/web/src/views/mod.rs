mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod shell;
pub use shell::Shell;

mod pages;
pub use pages::{Analytics, Setting, UserManage, UserProfile};
