pub mod cards;
pub mod dots;
pub mod field;
pub mod nav;
pub mod renderer;
pub mod section;
pub mod theme;
pub mod typewriter;
pub mod validation;

pub use field::{FieldParams, Surface};
pub use renderer::{Binding, Renderer};
pub use section::Section;
pub use theme::Theme;
