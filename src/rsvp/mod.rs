pub mod form;
pub mod guestbook;
