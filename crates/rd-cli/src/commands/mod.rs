pub mod create;
pub mod delete;
pub mod dispatch;
pub mod init;
pub mod list;
pub mod resend;
pub mod schema;
pub mod shared;
pub mod status;
pub mod whatsapp;
