#![forbid(unsafe_code)]

//! Dual-thumb range slider.
//!
//! A headless controller for a horizontal slider with two independently
//! draggable thumbs over one numeric range. The host feeds it measured
//! element sizes, raw touch events, and frame timestamps; it hands back
//! render frames and calls the host's callbacks.
//!
//! ```
//! use dslider::{DoubleSlider, LayoutElement, SliderCallbacks, SliderConfig, TouchEvent};
//! use dslider_core::Size;
//!
//! let mut slider = DoubleSlider::new(SliderConfig::default(), SliderCallbacks::new())?;
//! slider.report_layout(LayoutElement::Container, Size::new(300.0, 40.0));
//! slider.report_layout(LayoutElement::Track, Size::new(300.0, 4.0));
//! slider.report_layout(LayoutElement::LeftThumb, Size::new(20.0, 20.0));
//! slider.report_layout(LayoutElement::RightThumb, Size::new(20.0, 20.0));
//!
//! slider.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
//! slider.handle_touch(TouchEvent::Release { dx: 140.0, dy: 0.0 });
//! assert_eq!(slider.values(), (0.5, 1.0));
//! # Ok::<(), dslider::SliderError>(())
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod interaction;
pub mod layout;
pub mod notify;
pub mod router;
pub mod slider;
pub mod store;

pub use config::{ConfigError, DEFAULT_TOUCH_SIZE, LayoutDirection, SliderConfig};
pub use error::{Result, SliderError};
pub use frame::SliderFrame;
pub use interaction::{
    InteractionEffect, InteractionMachine, InteractionState, InteractionTransition, TouchEvent,
};
pub use layout::{GeometryModel, LayoutElement, LayoutUpdate};
pub use notify::{Notification, SliderCallbacks};
pub use router::{ThumbId, TouchRouter};
pub use slider::DoubleSlider;
pub use store::{Highlight, ValueStore};

pub use dslider_core;
