pub mod cards;
pub mod form;
pub mod nav;
pub mod theme;
pub mod typewriter;
