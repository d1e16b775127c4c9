//! Viewport-aware placement and hover timing for popover tooltips
//!
//! Tooltips declared as popovers get two behaviors on top of the host's
//! show/hide primitive: placement that keeps them on screen, and hover
//! timing that tolerates the pointer crossing from trigger to tooltip.
//!
//! ```
//! use hoverpop::config::TooltipConfig;
//! use hoverpop::dom::Document;
//! use hoverpop::geometry::{Rect, Viewport};
//! use hoverpop::page::{TOOLTIP_CLASS, TooltipPage};
//!
//! let mut doc = Document::new(Viewport::new(1024.0, 768.0));
//! let body = doc.body();
//!
//! let trigger = doc.create_element("button");
//! doc.set_attribute(trigger, "popovertarget", "tip");
//! doc.set_layout(trigger, Rect::new(50.0, 80.0, 40.0, 20.0));
//! doc.append_child(body, trigger);
//!
//! let tooltip = doc.create_element("div");
//! doc.set_id(tooltip, "tip");
//! doc.add_class(tooltip, TOOLTIP_CLASS);
//! doc.set_attribute(tooltip, "popover", "auto");
//! doc.set_layout(tooltip, Rect::new(0.0, 0.0, 200.0, 50.0));
//! doc.append_child(body, tooltip);
//!
//! let mut page = TooltipPage::new(doc, TooltipConfig::default());
//! page.pointer_enter(trigger);
//! page.advance(300);
//!
//! // Open, and placed 8px below the trigger
//! assert!(page.document().is_popover_open(tooltip));
//! assert_eq!(page.document().style(tooltip).unwrap().top, Some(108.0));
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod page;
pub mod popover;
pub mod portal;
pub mod position;
pub mod replay;
pub mod timeline;


pub use error::HoverpopError;
