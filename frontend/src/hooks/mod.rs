//! Custom Yew hooks for the frontend application.

mod use_experiments;

pub use use_experiments::use_experiments;
