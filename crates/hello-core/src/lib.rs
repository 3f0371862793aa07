//! Hello Core - the safe side of the hello demonstration library
//!
//! Three stateless operations, each usable from Rust without `unsafe`:
//!
//! - **Greeter**: writes `Hello, <name>!` plus a newline
//! - **Square**: returns `x * x` under IEEE-754 rules
//! - **Out-parameter writer**: stores 42 into caller-owned storage
//!
//! The C boundary in `hello-ffi` and the Python module in `hello-python`
//! are thin adapters over this crate.
//!
//! # Example
//!
//! ```
//! use hello_core::{greet_to, square, write_constant_into, Name};
//!
//! let mut out = Vec::new();
//! greet_to(&mut out, &Name::new("World")).unwrap();
//! assert_eq!(out, b"Hello, World!\n");
//!
//! assert_eq!(square(-2.0), 4.0);
//!
//! let mut val = 0;
//! write_constant_into(&mut val);
//! assert_eq!(val, 42);
//! ```

pub mod error;
pub mod greeter;
pub mod outparam;
pub mod square;
pub mod types;

pub use error::{Error, Result};
pub use greeter::{greet, greet_to, greeting};
pub use outparam::{write_constant, write_constant_into, ANSWER};
pub use square::square;
pub use types::{Name, OutSlot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
