//! Integration test common infrastructure.
//!
//! Provides reusable proxies, mediators and commands for driving a core
//! through its registries and asserting on dispatch behavior.

pub mod actors;

#[allow(unused_imports)]
pub use actors::{DoublingCommand, LifecycleProxy, QueryVo, TallyCommand, TallyMediator};
