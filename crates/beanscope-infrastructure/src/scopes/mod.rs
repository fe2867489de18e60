//! Reference scope implementations
//!
//! Scope implementations normally arrive through a [`BeanLocator`]; the
//! implementations here give the composition root and the test suite a
//! concrete scope to hand out.
//!
//! [`BeanLocator`]: beanscope_domain::ports::BeanLocator

pub mod in_memory;

pub use in_memory::InMemoryScope;
