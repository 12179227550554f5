mod app;
mod inspect;
mod ls;
mod upload;
mod verify;

pub use app::App;
