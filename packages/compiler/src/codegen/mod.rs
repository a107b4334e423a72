//! React Code Generation
//!
//! Emitters for every section of the generated component: props interface,
//! state hooks, computed accessors, methods, the JSX render tree, and the
//! final assembly.

pub mod assembler;
pub mod computed;
pub mod context;
pub mod events;
pub mod jsx;
pub mod methods;
pub mod props;
pub mod state;
