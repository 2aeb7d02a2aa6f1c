pub mod home;
pub mod redirect;
pub mod shorten;
