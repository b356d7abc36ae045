//! Presentational primitives shared by the page sections.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardContent};

mod input;
pub use input::Input;
