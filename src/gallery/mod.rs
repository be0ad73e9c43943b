//! Template gallery core: sync state machine, renderer and viewport policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is written against small traits (`TemplateSource`,
//! `GallerySurface`, `VisibilityObserver`) so it runs natively under test.
//! The browser bindings live next to the traits behind the `csr` feature and
//! in `components::gallery_grid`.

pub mod renderer;
pub mod sync;
pub mod viewport;
