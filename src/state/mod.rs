//! State Management Layer
//!
//! Owned, injectable state objects. Writers take `&mut`; readers subscribe to
//! change notifications:
//!
//! ```text
//! UI Action → State Method → persist → notify subscribers → effects re-run
//! ```

pub mod locale_state;
