//! Interactive effect wiring, one module per surface.

pub mod audio;
pub mod counters;
pub mod cursor;
pub mod form;
pub mod hero;
pub mod hover;
pub mod lightbox;
pub mod modal;
pub mod nav;
pub mod orbit;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod scramble;
pub mod sections;
pub mod trail;
