pub mod locale;
pub mod time;
