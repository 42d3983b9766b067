#![forbid(unsafe_code)]

//! Core: value mapping, hit geometry, and animation primitives for a
//! dual-thumb range slider.
//!
//! # Role
//! `dslider-core` is the pure layer. It owns the numeric range model and
//! its pixel mapping, the rectangle math used for touch hit-testing, and the
//! value-space animations that drive programmatic transitions. Nothing here
//! holds interaction state or calls back into a host; the `dslider` crate
//! builds the stateful control on top.
//!
//! # Primary responsibilities
//! - **ValueRange**: validated `[minimum, maximum]` with step quantization,
//!   value ↔ pixel offset conversion, right-to-left mirroring.
//! - **Size / TouchRect**: sanitized measurements and inclusive hit rects.
//! - **Animation**: [`animation::Timing`] tweens and [`animation::Spring`]
//!   physics behind the [`animation::Animator`] capability.

pub mod animation;
pub mod geometry;
pub mod range;

pub use geometry::{Size, TouchRect};
pub use range::{RangeError, ValueRange, usable_length};
