//! Core, DOM-free primitives and helpers for the page effects.
pub mod breakpoints;
pub mod buttons;
pub mod config;
pub mod cursor;
pub mod element;
pub mod error;
pub mod features;
pub mod menu;
pub mod particles;
pub mod sidebar;
pub mod theme;
pub mod typing;
