//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and content surfaces. Content panels
//! only receive selection callbacks and identifiers; the router state is
//! owned by the pages.

pub mod catalog;
pub mod navigation;
pub mod overlays;
pub mod panels;
