pub mod app_event;
pub mod bus;

pub use app_event::AppEvent;
pub use bus::AppEventBus;
