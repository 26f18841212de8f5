pub mod check_users;
pub mod serve;
