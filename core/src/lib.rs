//! # ptrwalk core
//!
//! Reverse-resolves every usable host of a subnet.
//!
//! * **[`resolver`]**: the [`AddressResolver`](resolver::AddressResolver) seam and
//!   its concrete implementations.
//! * **[`sweep`]**: drives a resolver over a
//!   [`HostRange`](ptrwalk_common::network::range::HostRange) with bounded
//!   concurrency while keeping the output in address order.

pub mod resolver;
pub mod sweep;
