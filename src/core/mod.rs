pub mod app;
pub mod geo;
pub mod validate;

pub use app::{App, AppEvent, FormField, FormState, Outcome};
pub use validate::FormInput;
