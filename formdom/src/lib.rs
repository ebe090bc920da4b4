pub mod buffer;
pub mod canvas;
pub mod control;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod handlers;
pub mod hit;
pub mod layout;
pub mod refs;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use canvas::{Circle, DotGrid, Graphic};
pub use control::{ControlKind, NativeControl, NativeInputs};
pub use document::Document;
pub use element::{find_element, find_path, Content, Element};
pub use error::DomError;
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use handlers::{EventContext, Handler, HandlerRegistry};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use refs::{merge_refs, MergedRef, NodeHandle, NodeRef, RefTarget};
pub use terminal::Terminal;
pub use types::*;
