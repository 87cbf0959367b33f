//! mdhtml Parser
//!
//! The character-level machinery behind mdhtml: every input byte is
//! located, checked for whitespace runs, and classified as heading
//! syntax or text, strictly forward with no lookahead.
//!
//! # Example
//!
//! ```
//! use mdhtml_core::Input;
//! use mdhtml_parser::{Action, HeadingStateMachine, PositionTracker};
//!
//! let mut tracker = PositionTracker::new();
//! let mut machine = HeadingStateMachine::new();
//!
//! let mut actions = Vec::new();
//! for b in b"# Hi" {
//!     let input = Input::Byte(*b);
//!     let position = tracker.advance(input);
//!     actions.push(machine.step(input, position.column).unwrap());
//! }
//! let end = tracker.advance(Input::End);
//! actions.push(machine.step(Input::End, end.column).unwrap());
//!
//! assert_eq!(actions[1], Action::Open(1));
//! assert_eq!(actions.last(), Some(&Action::Close { level: 1, text: b"Hi".to_vec() }));
//! ```

pub mod buffer;
pub mod heading;
pub mod position;
pub mod whitespace;

pub use buffer::{is_space, HeadingBuffer, HEADING_TEXT_BASE_SIZE};
pub use heading::{Action, HeadingStateMachine};
pub use position::{is_continuation_byte, PositionTracker};
pub use whitespace::WhitespaceRunClassifier;
